pub mod admin;
pub mod health;
pub mod public;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws                                   WebSocket (site events)
///
/// /site-config                          site config (GET)
/// /projects                             gallery projects (GET, ?category=&limit=)
/// /projects/categories                  gallery filter chips (GET)
/// /hero                                 hero slides (GET)
///
/// /admin/session                        login (POST, public), logout (DELETE)
/// /admin/site-config                    save + broadcast (PUT)
/// /admin/projects                       list, create
/// /admin/projects/{id}                  update, delete (?confirm=true)
/// /admin/categories                     list, create
/// /admin/categories/{id}                update, delete (?confirm=true)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .merge(public::router())
        .nest("/admin", admin::router())
}
