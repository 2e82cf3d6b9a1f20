//! Sales dashboard SDK for Rust.
//!
//! Fetches sales transactions from the labdados sales API, filters them by
//! seller, aggregates them by state, month, category and seller, and lays the
//! results out as serializable chart specifications for a browser front end.
//!
//! # Quick start
//!
//! ```no_run
//! use sales_dashboard::{DashboardFilters, Region, SalesDashboard};
//!
//! let sdk = SalesDashboard::builder().build().unwrap();
//!
//! // Raw transactions
//! let rows = sdk.fetch(Region::Sudeste, Some(2022)).unwrap();
//!
//! // A full render pass
//! let filters = DashboardFilters { region: Region::Sul, ..Default::default() };
//! let dashboard = sdk.render(filters).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod pipeline;
pub mod presentation;

#[cfg(feature = "async")]
pub use async_client::AsyncSalesDashboard;
pub use client::SalesClient;
pub use error::{Result, SalesError};
pub use filter::DashboardFilters;
pub use format::format_magnitude;
pub use models::{Region, Transaction};
pub use pipeline::SalesTables;
pub use presentation::Dashboard;

use std::fmt;

use tracing::info;

// ---------------------------------------------------------------------------
// SalesDashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SalesDashboard`] instance.
///
/// Use [`SalesDashboard::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SalesDashboardBuilder::build).
#[derive(Default)]
pub struct SalesDashboardBuilder {
    base_url: Option<String>,
}

impl SalesDashboardBuilder {
    /// Set the sales API endpoint.
    ///
    /// If not set, `SALES_DASHBOARD_API_URL` is used when present, otherwise
    /// [`config::DEFAULT_API_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build the SDK. No request is made until the first fetch.
    pub fn build(self) -> Result<SalesDashboard> {
        let client = SalesClient::new(self.base_url)?;
        Ok(SalesDashboard { client })
    }
}

// ---------------------------------------------------------------------------
// SalesDashboard
// ---------------------------------------------------------------------------

/// The main entry point: one fetch-filter-aggregate-layout pass per call.
///
/// Holds no state between passes besides the HTTP client; every
/// [`render`](Self::render) re-fetches fresh data.
pub struct SalesDashboard {
    client: SalesClient,
}

impl SalesDashboard {
    pub fn builder() -> SalesDashboardBuilder {
        SalesDashboardBuilder::default()
    }

    /// Fetch the transactions for a region and optional year.
    pub fn fetch(&self, region: Region, year: Option<i32>) -> Result<Vec<Transaction>> {
        self.client.fetch(region, year)
    }

    /// Fetch, filter by seller, and aggregate into [`SalesTables`].
    pub fn tables(&self, filters: &DashboardFilters) -> Result<SalesTables> {
        let transactions = self.fetch(filters.region, filters.year)?;
        let filtered = filter::filter_by_sellers(&transactions, &filters.sellers);
        Ok(SalesTables::compute(&filtered))
    }

    /// Run a full render pass and return the dashboard layout.
    ///
    /// Filters are validated before any request is sent. A failed fetch
    /// aborts the pass; no partial dashboard is produced.
    pub fn render(&self, filters: DashboardFilters) -> Result<Dashboard> {
        filters.validate()?;
        let transactions = self.fetch(filters.region, filters.year)?;
        let rows = transactions.len();
        let dashboard = Dashboard::build(&transactions, filters)?;
        info!(
            rows,
            region = %dashboard.filters.region,
            year = ?dashboard.filters.year,
            "Rendered sales dashboard"
        );
        Ok(dashboard)
    }

    /// Return a reference to the underlying [`SalesClient`].
    pub fn client(&self) -> &SalesClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SalesDashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SalesDashboard(base_url={})", self.client.base_url)
    }
}
