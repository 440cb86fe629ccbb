//! Admin gate for `/api/v1/admin/*`.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use nemitzam_core::error::CoreError;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

const BEARER: &str = "Bearer ";

/// Extractor for handlers behind the admin login. Holds the session token
/// taken from `Authorization: Bearer <token>`, which must belong to a
/// session opened by `POST /api/v1/admin/session` and not yet closed.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin(pub Uuid);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(parts).ok_or_else(|| unauthorized("Admin session token required"))?;

        if state.sessions.is_open(&token).await {
            Ok(RequireAdmin(token))
        } else {
            tracing::debug!(%token, "Rejected closed admin session");
            Err(unauthorized("Admin session is closed"))
        }
    }
}

/// The session token, when the header is present and well-formed.
pub fn bearer_token(parts: &Parts) -> Option<Uuid> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER)
        .and_then(|token| Uuid::parse_str(token.trim()).ok())
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut request = Request::builder().uri("/api/v1/admin/projects");
        if let Some(value) = header {
            request = request.header(AUTHORIZATION, value);
        }
        request.body(()).unwrap().into_parts().0
    }

    #[test]
    fn parses_bearer_uuid() {
        let token = Uuid::new_v4();
        let parts = parts_with(Some(&format!("Bearer {token}")));
        assert_eq!(bearer_token(&parts), Some(token));
    }

    #[test]
    fn rejects_missing_or_malformed_tokens() {
        assert_eq!(bearer_token(&parts_with(None)), None);
        assert_eq!(bearer_token(&parts_with(Some("Basic abc"))), None);
        assert_eq!(bearer_token(&parts_with(Some("Bearer not-a-uuid"))), None);
    }
}
