//! Admin project CRUD.
//!
//! Validation runs before any gateway call. Deletes need `?confirm=true`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nemitzam_core::drafts::ProjectDraft;
use nemitzam_core::error::CoreError;
use nemitzam_core::types::DbId;
use nemitzam_db::ListQuery;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::{created, DataResponse};
use crate::state::AppState;

/// Query parameters for destructive requests.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub confirm: bool,
}

impl DeleteParams {
    /// Reject unless the caller confirmed.
    pub fn require(&self, question: &str) -> AppResult<()> {
        if self.confirm {
            Ok(())
        } else {
            Err(AppError::ConfirmationRequired(question.to_string()))
        }
    }
}

/// GET /api/v1/admin/projects
pub async fn list_projects(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = state.gateway.list_projects(ListQuery::all()).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/admin/projects
pub async fn create_project(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ProjectDraft>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let project = state.gateway.insert_project(&input).await?;

    tracing::info!(project_id = project.id, title = %project.title, "Project created");

    Ok(created(project))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update_project(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<ProjectDraft>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let project = state
        .gateway
        .update_project(project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    tracing::info!(project_id, "Project updated");

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}?confirm=true
pub async fn delete_project(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    params.require("Deleting a project requires confirm=true")?;

    if !state.gateway.delete_project(project_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }));
    }

    tracing::info!(project_id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
