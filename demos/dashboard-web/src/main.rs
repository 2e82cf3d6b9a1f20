mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let sdk = sales_dashboard::AsyncSalesDashboard::builder()
        .build()
        .await
        .expect("Failed to initialize sales dashboard SDK");
    info!("SDK ready");

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route("/", get(routes::page::index))
        .route("/api/regions", get(routes::meta::list_regions))
        .route("/api/dashboard", get(routes::dashboard::get_dashboard))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("DASHBOARD_ADDR").unwrap_or_else(|_| "0.0.0.0:8501".to_string());
    info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
