use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SiteHealth {
    /// `ok`, or `degraded` when the gateway does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Open WebSocket connections following config changes.
    pub live_clients: usize,
    pub admin_sessions: usize,
}

/// GET /health
async fn site_health(State(state): State<AppState>) -> Json<SiteHealth> {
    let db_healthy = match state.gateway.health_check().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Gateway health check failed");
            false
        }
    };

    Json(SiteHealth {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        live_clients: state.ws_manager.connection_count().await,
        admin_sessions: state.sessions.count().await,
    })
}

/// Root-level routes, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(site_health))
}
