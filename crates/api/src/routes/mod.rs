pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                              list, create
/// /projects/{project_id}                                 get, update, delete
/// /projects/{project_id}/pages                           list, create
/// /projects/{project_id}/pages/{page_id}                 get, update, delete
/// /projects/{project_id}/pages/{page_id}/panels          list, create
/// /projects/{project_id}/pages/{page_id}/panels/{panel_id} get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
