//! Blocking HTTP client for the sales API.
//!
//! Issues a single GET per call with the `regiao` and `ano` query parameters
//! and parses the JSON array body into [`Transaction`]s. No retries: any
//! transport failure, non-success status or malformed body is returned to
//! the caller.

use crate::config;
use crate::error::{Result, SalesError};
use crate::models::{Region, Transaction};
use reqwest::blocking::Client;
use tracing::{debug, warn};

/// Fetches transactions from the sales API.
pub struct SalesClient {
    /// Endpoint URL, without query string.
    pub base_url: String,
    client: Client,
}

impl SalesClient {
    /// Create a client for the given endpoint.
    ///
    /// If `base_url` is `None`, uses [`config::default_api_url`].
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.unwrap_or_else(config::default_api_url),
            client,
        })
    }

    /// Fetch all transactions matching a region and an optional year.
    ///
    /// # Errors
    ///
    /// * [`SalesError::DataFetch`] on network failure or a non-2xx status.
    /// * [`SalesError::DataFormat`] when the body is not a JSON array of
    ///   transactions (including dates not in `DD/MM/YYYY`).
    pub fn fetch(&self, region: Region, year: Option<i32>) -> Result<Vec<Transaction>> {
        let regiao = region.query_value();
        let ano = year.map(|y| y.to_string()).unwrap_or_default();
        debug!(url = %self.base_url, regiao = %regiao, ano = %ano, "Fetching transactions");

        let body = self
            .client
            .get(&self.base_url)
            .query(&[("regiao", regiao.as_str()), ("ano", ano.as_str())])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| {
                warn!("Failed to fetch transactions from {}: {}", self.base_url, e);
                SalesError::DataFetch(e)
            })?;

        let transactions = parse_transactions(&body)?;
        debug!(rows = transactions.len(), "Parsed transactions");
        Ok(transactions)
    }
}

/// Parse a sales API response body.
pub fn parse_transactions(body: &str) -> Result<Vec<Transaction>> {
    serde_json::from_str(body).map_err(|e| {
        warn!("Malformed sales API response: {}", e);
        SalesError::DataFormat(e)
    })
}
