//! Shared test fixtures for the sales dashboard integration tests.
//!
//! Provides sample transaction sets and `serve_once()`, a one-shot local HTTP
//! responder standing in for the sales API.

#![allow(dead_code)]

use chrono::NaiveDate;
use sales_dashboard::Transaction;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub fn date(dmy: &str) -> NaiveDate {
    NaiveDate::parse_from_str(dmy, "%d/%m/%Y").unwrap()
}

/// Two sales in SP (100, 200) and one in RJ (50).
pub fn three_row_fixture() -> Vec<Transaction> {
    vec![
        Transaction::new("SP", "Ana", "livros", 100.0, date("01/01/2021"))
            .with_location(-22.19, -48.79),
        Transaction::new("RJ", "Bruno", "livros", 50.0, date("02/01/2021"))
            .with_location(-22.25, -42.66),
        Transaction::new("SP", "Ana", "moveis", 200.0, date("03/02/2021"))
            .with_location(-22.19, -48.79),
    ]
}

/// Five sales across three states, three sellers, three categories and a
/// one-year gap between January 2021 and January 2022.
///
/// Totals: revenue 2550, sales 5.
/// By state: RJ 1200 (2), SP 1050 (2), MG 300 (1).
/// By category: eletronicos 1300 (2), moveis 1200 (2), livros 50 (1).
/// By seller: Pedro Gomes 1700 (2), Beatriz Moraes 550 (2), Juliana Costa 300 (1).
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("SP", "Pedro Gomes", "eletronicos", 1000.0, date("05/01/2021"))
            .with_location(-22.19, -48.79),
        Transaction::new("RJ", "Beatriz Moraes", "moveis", 500.0, date("10/01/2021"))
            .with_location(-22.25, -42.66),
        // Same state, different coordinates: the first SP row wins.
        Transaction::new("SP", "Beatriz Moraes", "livros", 50.0, date("15/03/2021"))
            .with_location(-23.0, -47.0),
        Transaction::new("MG", "Juliana Costa", "eletronicos", 300.0, date("02/01/2022"))
            .with_location(-18.1, -44.38),
        Transaction::new("RJ", "Pedro Gomes", "moveis", 700.0, date("28/01/2021"))
            .with_location(-22.25, -42.66),
    ]
}

/// A response body in the sales API's wire format.
pub fn sample_body() -> String {
    serde_json::json!([
        {
            "Produto": "Celular Plus X42",
            "Categoria do Produto": "eletronicos",
            "Preço": 3346.0,
            "Frete": 178.47,
            "Data da Compra": "05/01/2021",
            "Vendedor": "Pedro Gomes",
            "Local da compra": "SP",
            "Avaliação da compra": 4,
            "Tipo de pagamento": "cartao_credito",
            "Quantidade de parcelas": 4,
            "lat": -22.19,
            "lon": -48.79
        },
        {
            "Produto": "Cômoda",
            "Categoria do Produto": "moveis",
            "Preço": 412.5,
            "Frete": 21.8,
            "Data da Compra": "21/11/2022",
            "Vendedor": "Beatriz Moraes",
            "Local da compra": "RJ",
            "Avaliação da compra": 5,
            "Tipo de pagamento": "boleto",
            "Quantidade de parcelas": 1,
            "lat": -22.25,
            "lon": -42.66
        }
    ])
    .to_string()
}

/// Handle to a one-shot HTTP responder.
pub struct MockServer {
    /// Base URL of the responder, e.g. `http://127.0.0.1:40123/produtos`.
    pub url: String,
    handle: JoinHandle<String>,
}

impl MockServer {
    /// Wait for the single request and return its head (request line + headers).
    pub fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

/// Answer exactly one request with the given status and body.
pub fn serve_once(status: u16, reason: &str, body: String) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/produtos", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });

    MockServer { url, handle }
}

/// A URL on which nothing is listening.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/produtos", addr)
}
