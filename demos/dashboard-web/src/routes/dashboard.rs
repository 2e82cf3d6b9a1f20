use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use sales_dashboard::config;
use sales_dashboard::{Dashboard, DashboardFilters, Region};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Query string mirroring the sidebar. Empty values mean "no filter".
#[derive(Debug, Default)]
pub struct DashboardParams {
    pub regiao: Option<String>,
    pub ano: Option<String>,
    /// One entry per repeated `vendedores=` parameter.
    pub vendedores: Vec<String>,
    pub top: Option<String>,
}

impl DashboardParams {
    /// Collect raw query pairs; `vendedores` may repeat, other keys keep the last value.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "regiao" => params.regiao = Some(value),
                "ano" => params.ano = Some(value),
                "vendedores" => params.vendedores.push(value),
                "top" => params.top = Some(value),
                _ => {}
            }
        }
        params
    }

    fn into_filters(self) -> Result<DashboardFilters, AppError> {
        let region: Region = self.regiao.as_deref().unwrap_or("").parse()?;

        let year = match self.ano.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i32>()
                    .map_err(|_| AppError::bad_request(format!("Invalid year: {raw}")))?,
            ),
        };

        let seller_count = match self.top.as_deref().map(str::trim) {
            None | Some("") => config::SELLER_COUNT_DEFAULT,
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| AppError::bad_request(format!("Invalid seller count: {raw}")))?,
        };

        let sellers = self
            .vendedores
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();

        Ok(DashboardFilters {
            region,
            year,
            sellers,
            seller_count,
        })
    }
}

/// GET /api/dashboard?regiao=sul&ano=2022&vendedores=Ana&vendedores=Bruno&top=5
///
/// Run one render pass and return the full dashboard layout.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Dashboard>, AppError> {
    let filters = DashboardParams::from_pairs(pairs).into_filters()?;
    let dashboard = state.sdk.render(filters).await.map_err(|e| {
        warn!("Render pass failed: {e}");
        AppError::from(e)
    })?;
    Ok(Json(dashboard))
}
