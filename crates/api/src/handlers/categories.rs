//! Admin category CRUD. Slugs are lower-cased before they are written.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nemitzam_core::drafts::CategoryDraft;
use nemitzam_core::error::CoreError;
use nemitzam_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::handlers::projects::DeleteParams;
use crate::middleware::auth::RequireAdmin;
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// GET /api/v1/admin/categories
pub async fn list_categories(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = state.gateway.list_categories().await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/admin/categories
pub async fn create_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CategoryDraft>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let category = state.gateway.insert_category(&input.normalized()).await?;

    tracing::info!(category_id = category.id, slug = %category.slug, "Category created");

    Ok(created(category))
}

/// PUT /api/v1/admin/categories/{id}
pub async fn update_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Json(input): Json<CategoryDraft>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let category = state
        .gateway
        .update_category(category_id, &input.normalized())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))?;

    tracing::info!(category_id, "Category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/admin/categories/{id}?confirm=true
pub async fn delete_category(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    params.require("Deleting a category requires confirm=true")?;

    if !state.gateway.delete_category(category_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }));
    }

    tracing::info!(category_id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
