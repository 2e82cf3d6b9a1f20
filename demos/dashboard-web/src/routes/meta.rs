use axum::response::Json;
use sales_dashboard::{config, Region};
use serde_json::{json, Value};

/// GET /api/regions
///
/// Region names for the sidebar, plus the year slider and seller count bounds.
pub async fn list_regions() -> Json<Value> {
    let regions: Vec<Value> = Region::ALL
        .iter()
        .map(|r| json!({ "name": r.name(), "value": r.query_value() }))
        .collect();

    Json(json!({
        "data": regions,
        "years": [config::YEAR_MIN, config::YEAR_MAX],
        "seller_count": {
            "min": config::SELLER_COUNT_MIN,
            "max": config::SELLER_COUNT_MAX,
            "default": config::SELLER_COUNT_DEFAULT
        }
    }))
}
