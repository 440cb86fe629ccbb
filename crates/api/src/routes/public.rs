//! Read-only routes backing the public site.

use axum::routing::get;
use axum::Router;

use crate::handlers::{gallery, site_config};
use crate::state::AppState;

/// ```text
/// GET /site-config           -> get_site_config
/// GET /projects              -> list_projects
/// GET /projects/categories   -> list_filters
/// GET /hero                  -> get_hero
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/site-config", get(site_config::get_site_config))
        .route("/projects", get(gallery::list_projects))
        .route("/projects/categories", get(gallery::list_filters))
        .route("/hero", get(gallery::get_hero))
}
