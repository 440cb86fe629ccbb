use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nemitzam_core::error::CoreError;
use nemitzam_db::GatewayError;
use nemitzam_studio::ConfigSaveError;
use serde::Serialize;

const GENERIC_MESSAGE: &str = "An internal error occurred";

/// Handler error. Every variant renders as `{ "error", "code" }`; a
/// partial config save also lists the keys it did write.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    ConfigSave(#[from] ConfigSaveError),

    /// A delete sent without `confirm=true`.
    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    applied: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed_key: Option<&'static str>,
}

impl AppError {
    fn status_code_message(&self) -> (StatusCode, &'static str, String) {
        match self {
            Self::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            Self::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            Self::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            Self::Gateway(GatewayError::Database(err)) => classify_sqlx_error(err),
            Self::Gateway(GatewayError::Rejected(msg)) => {
                tracing::error!(error = %msg, "Gateway rejected request");
                (StatusCode::INTERNAL_SERVER_ERROR, "GATEWAY_ERROR", msg.clone())
            }
            Self::ConfigSave(err) => {
                tracing::error!(
                    failed_key = err.failed_key,
                    applied = err.applied.len(),
                    error = %err.source,
                    "Site config saved partially",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, "PARTIAL_SAVE", err.to_string())
            }
            Self::ConfirmationRequired(msg) => {
                (StatusCode::CONFLICT, "CONFIRMATION_REQUIRED", msg.clone())
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.status_code_message();
        let (applied, failed_key) = match &self {
            Self::ConfigSave(err) => (Some(err.applied.clone()), Some(err.failed_key)),
            _ => (None, None),
        };
        let body = ErrorBody {
            error,
            code,
            applied,
            failed_key,
        };
        (status, Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        GENERIC_MESSAGE.to_string(),
    )
}

/// Map database failures that a caller can act on; everything else is a
/// sanitized 500.
///
/// - `23505` duplicate key (e.g. a category slug) is 409.
/// - `23503` foreign key violation is 409.
/// - `RowNotFound` is 404.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!(
                    "Duplicate value violates unique constraint: {}",
                    db_err.constraint().unwrap_or("unknown")
                ),
            ),
            Some("23503") => (
                StatusCode::CONFLICT,
                "CONFLICT",
                "Row is still referenced".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
