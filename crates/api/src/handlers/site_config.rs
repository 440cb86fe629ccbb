//! Site configuration endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use nemitzam_core::site_config::SiteConfig;

use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/site-config
///
/// Fresh read of every config row folded onto the defaults.
pub async fn get_site_config(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let config = state.config_store.fetch(None).await?;
    Ok(Json(DataResponse { data: config }))
}

/// PUT /api/v1/admin/site-config
///
/// Save the full record key by key, then broadcast it to every WebSocket
/// subscriber. Fields missing from the body take their default value.
pub async fn update_site_config(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<SiteConfig>,
) -> AppResult<impl IntoResponse> {
    state.config_store.save(&input).await?;
    Ok(Json(DataResponse { data: input }))
}
