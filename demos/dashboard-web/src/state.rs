/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Dispatches each blocking render pass to the blocking thread pool.
    pub sdk: sales_dashboard::AsyncSalesDashboard,
}
