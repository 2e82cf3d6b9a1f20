use std::env;

pub const DEFAULT_API_URL: &str = "https://labdados.com/produtos";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "SALES_DASHBOARD_API_URL";

// Year slider bounds offered by the sidebar.
pub const YEAR_MIN: i32 = 2020;
pub const YEAR_MAX: i32 = 2023;

/// Number of states shown in the "top states" bar charts.
pub const TOP_ENTITIES: usize = 5;

pub const SELLER_COUNT_MIN: usize = 2;
pub const SELLER_COUNT_MAX: usize = 10;
pub const SELLER_COUNT_DEFAULT: usize = 5;

/// Currency prefix for revenue metrics.
pub const REVENUE_PREFIX: &str = "R$";

/// Map scope passed to the geo scatter charts.
pub const GEO_SCOPE: &str = "south america";

pub fn default_api_url() -> String {
    match env::var(API_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}
