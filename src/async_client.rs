//! Async wrapper around [`SalesDashboard`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every render pass on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], since the underlying client is the
//! blocking `reqwest` client and must not run on the event loop.
//!
//! # Example
//!
//! ```no_run
//! use sales_dashboard::{AsyncSalesDashboard, DashboardFilters};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncSalesDashboard::builder().build().await.unwrap();
//!     let dashboard = sdk.render(DashboardFilters::default()).await.unwrap();
//! }
//! ```

use std::sync::Arc;

use crate::error::{Result, SalesError};
use crate::{Dashboard, DashboardFilters, SalesDashboard};

// ---------------------------------------------------------------------------
// AsyncSalesDashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSalesDashboard`] instance.
#[derive(Default)]
pub struct AsyncSalesDashboardBuilder {
    base_url: Option<String>,
}

impl AsyncSalesDashboardBuilder {
    /// Set the sales API endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is created on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncSalesDashboard> {
        tokio::task::spawn_blocking(move || {
            let mut builder = SalesDashboard::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            let sdk = builder.build()?;
            Ok(AsyncSalesDashboard {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(|e| SalesError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncSalesDashboard
// ---------------------------------------------------------------------------

/// Async wrapper around [`SalesDashboard`].
///
/// Cheap to clone; clones share the same HTTP client.
#[derive(Clone)]
pub struct AsyncSalesDashboard {
    inner: Arc<SalesDashboard>,
}

impl AsyncSalesDashboard {
    pub fn builder() -> AsyncSalesDashboardBuilder {
        AsyncSalesDashboardBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// ```no_run
    /// # use sales_dashboard::{AsyncSalesDashboard, Region};
    /// # async fn example() -> sales_dashboard::Result<()> {
    /// # let sdk = AsyncSalesDashboard::builder().build().await?;
    /// let rows = sdk.run(|s| s.fetch(Region::Norte, Some(2021))).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SalesDashboard) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| SalesError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Run a full render pass asynchronously.
    pub async fn render(&self, filters: DashboardFilters) -> Result<Dashboard> {
        self.run(move |s| s.render(filters)).await
    }

    /// Release the HTTP client on the blocking pool.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| SalesError::InvalidArgument(format!("Task join error: {e}")))
    }
}
