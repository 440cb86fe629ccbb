//! Admin session login/logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nemitzam_core::error::CoreError;
use nemitzam_studio::prompt::WRONG_PASSWORD;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::created;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionToken {
    pub token: Uuid,
}

/// POST /api/v1/admin/session
///
/// Exchange the shared admin secret for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let token = state.sessions.open(&input.password).await.ok_or_else(|| {
        tracing::debug!("Admin login rejected");
        AppError::Core(CoreError::Unauthorized(WRONG_PASSWORD.into()))
    })?;

    tracing::info!("Admin session opened");

    Ok(created(SessionToken { token }))
}

/// DELETE /api/v1/admin/session
pub async fn logout(
    RequireAdmin(token): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    state.sessions.close(&token).await;
    tracing::info!("Admin session closed");
    Ok(StatusCode::NO_CONTENT)
}
