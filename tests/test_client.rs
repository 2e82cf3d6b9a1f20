//! Client tests against a local one-shot HTTP responder.

mod common;

use sales_dashboard::{DashboardFilters, Region, SalesDashboard, SalesError};

fn sdk_for(url: &str) -> SalesDashboard {
    SalesDashboard::builder().base_url(url).build().unwrap()
}

// ---------------------------------------------------------------------------
// fetch
// ---------------------------------------------------------------------------

#[test]
fn fetch_parses_successful_response() {
    let server = common::serve_once(200, "OK", common::sample_body());
    let sdk = sdk_for(&server.url);

    let rows = sdk.fetch(Region::All, None).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].state, "RJ");
    server.request();
}

#[test]
fn fetch_sends_region_and_year_parameters() {
    let server = common::serve_once(200, "OK", "[]".to_string());
    let sdk = sdk_for(&server.url);

    sdk.fetch(Region::CentroOeste, Some(2022)).unwrap();
    let request = server.request();
    let request_line = request.lines().next().unwrap();
    assert!(request_line.starts_with("GET /produtos?"));
    assert!(request_line.contains("regiao=centro-oeste"));
    assert!(request_line.contains("ano=2022"));
}

#[test]
fn fetch_all_sends_empty_parameters() {
    let server = common::serve_once(200, "OK", "[]".to_string());
    let sdk = sdk_for(&server.url);

    sdk.fetch(Region::All, None).unwrap();
    let request = server.request();
    assert!(request.lines().next().unwrap().contains("/produtos?regiao=&ano="));
}

#[test]
fn server_error_is_data_fetch_error() {
    let server = common::serve_once(500, "Internal Server Error", "[]".to_string());
    let sdk = sdk_for(&server.url);

    let err = sdk.fetch(Region::All, None).unwrap_err();
    assert!(matches!(err, SalesError::DataFetch(_)));
    server.request();
}

#[test]
fn server_error_produces_no_tables() {
    let server = common::serve_once(500, "Internal Server Error", "[]".to_string());
    let sdk = sdk_for(&server.url);

    let result = sdk.tables(&DashboardFilters::default());
    assert!(matches!(result, Err(SalesError::DataFetch(_))));
    server.request();
}

#[test]
fn not_found_is_data_fetch_error() {
    let server = common::serve_once(404, "Not Found", "{}".to_string());
    let sdk = sdk_for(&server.url);

    let err = sdk.fetch(Region::Sul, Some(2020)).unwrap_err();
    assert!(matches!(err, SalesError::DataFetch(_)));
    server.request();
}

#[test]
fn malformed_body_is_data_format_error() {
    let server = common::serve_once(200, "OK", "[{\"Preço\": ".to_string());
    let sdk = sdk_for(&server.url);

    let err = sdk.fetch(Region::All, None).unwrap_err();
    assert!(matches!(err, SalesError::DataFormat(_)));
    server.request();
}

#[test]
fn connection_refused_is_data_fetch_error() {
    let sdk = sdk_for(&common::unreachable_url());
    let err = sdk.fetch(Region::All, None).unwrap_err();
    assert!(matches!(err, SalesError::DataFetch(_)));
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_runs_a_full_pass() {
    let server = common::serve_once(200, "OK", common::sample_body());
    let sdk = sdk_for(&server.url);

    let dashboard = sdk.render(DashboardFilters::default()).unwrap();
    assert_eq!(dashboard.tabs.len(), 3);
    assert_eq!(dashboard.available_sellers.len(), 2);
    server.request();
}

#[test]
fn render_rejects_invalid_filters_before_fetching() {
    // Nothing listens here; validation must fail first.
    let sdk = sdk_for(&common::unreachable_url());
    let filters = DashboardFilters {
        seller_count: 42,
        ..Default::default()
    };
    let err = sdk.render(filters).unwrap_err();
    assert!(matches!(err, SalesError::InvalidArgument(_)));
}

#[test]
fn display_shows_base_url() {
    let sdk = sdk_for("http://localhost:9/produtos");
    assert_eq!(sdk.to_string(), "SalesDashboard(base_url=http://localhost:9/produtos)");
}

#[test]
fn client_accessor_shares_the_configured_endpoint() {
    let server = common::serve_once(200, "OK", common::sample_body());
    let sdk = sdk_for(&server.url);

    let client = sdk.client();
    assert_eq!(client.base_url, server.url);
    let rows = client.fetch(Region::Sul, Some(2021)).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(server.request().contains("regiao=sul&ano=2021"));
}
