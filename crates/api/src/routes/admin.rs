//! Admin routes mounted at `/admin`. Everything except login requires a
//! session token.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{categories, projects, session, site_config};
use crate::state::AppState;

/// ```text
/// POST   /session            -> login
/// DELETE /session            -> logout
/// PUT    /site-config        -> update_site_config
/// GET    /projects           -> list_projects
/// POST   /projects           -> create_project
/// PUT    /projects/{id}      -> update_project
/// DELETE /projects/{id}      -> delete_project
/// GET    /categories         -> list_categories
/// POST   /categories         -> create_category
/// PUT    /categories/{id}    -> update_category
/// DELETE /categories/{id}    -> delete_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", post(session::login).delete(session::logout))
        .route("/site-config", put(site_config::update_site_config))
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/{id}",
            put(projects::update_project).delete(projects::delete_project),
        )
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
}
