//! Public read-only endpoints backing the gallery and hero.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use nemitzam_core::gallery::{filter_label, ALL_CATEGORIES};
use nemitzam_core::rotator::AUTO_ADVANCE_INTERVAL;
use nemitzam_db::models::project::Project;
use nemitzam_db::ListQuery;
use nemitzam_studio::display::{Gallery, HeroView};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GalleryParams {
    /// Category slug, or `todas` for everything.
    pub category: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct HeroResponse {
    pub slides: Vec<Project>,
    pub interval_ms: u64,
}

/// GET /api/v1/projects?category=&limit=
///
/// Projects in display order, narrowed to one category when given.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> AppResult<impl IntoResponse> {
    if params.limit.is_some_and(|limit| limit < 0) {
        return Err(AppError::BadRequest("limit must not be negative".into()));
    }

    let projects = state.gateway.list_projects(ListQuery::all()).await?;
    let mut gallery = Gallery::from_projects(projects);
    gallery.select(params.category.as_deref().unwrap_or(ALL_CATEGORIES));

    let mut visible: Vec<Project> = gallery.visible().into_iter().cloned().collect();
    if let Some(limit) = params.limit {
        visible.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }

    Ok(Json(DataResponse { data: visible }))
}

/// GET /api/v1/projects/categories
///
/// Filter chips: `todas` followed by each category present in the projects.
pub async fn list_filters(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = state.gateway.list_projects(ListQuery::all()).await?;
    let filters: Vec<FilterOption> = Gallery::from_projects(projects)
        .filters()
        .into_iter()
        .map(|value| FilterOption {
            label: filter_label(&value),
            value,
        })
        .collect();

    Ok(Json(DataResponse { data: filters }))
}

/// GET /api/v1/hero
///
/// The first projects to rotate, or the placeholder slide.
pub async fn get_hero(State(state): State<AppState>) -> Json<DataResponse<HeroResponse>> {
    let hero = HeroView::load(state.gateway.as_ref()).await;
    Json(DataResponse {
        data: HeroResponse {
            slides: hero.slides().to_vec(),
            interval_ms: AUTO_ADVANCE_INTERVAL.as_millis() as u64,
        },
    })
}
