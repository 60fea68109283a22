//! Route definitions for the `/projects` resource.
//!
//! Pages and panels are nested under their parents so every request names
//! the full ownership chain.

use axum::routing::get;
use axum::Router;

use crate::handlers::{page, panel, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                               -> project::list
/// POST   /                                               -> project::create
/// GET    /{project_id}                                   -> project::get_by_id
/// PUT    /{project_id}                                   -> project::update
/// DELETE /{project_id}                                   -> project::delete
///
/// GET    /{project_id}/pages                             -> page::list_by_project
/// POST   /{project_id}/pages                             -> page::create
/// GET    /{project_id}/pages/{page_id}                   -> page::get_by_id
/// PUT    /{project_id}/pages/{page_id}                   -> page::update
/// DELETE /{project_id}/pages/{page_id}                   -> page::delete
///
/// GET    /{project_id}/pages/{page_id}/panels            -> panel::list_by_page
/// POST   /{project_id}/pages/{page_id}/panels            -> panel::create
/// GET    /{project_id}/pages/{page_id}/panels/{panel_id} -> panel::get_by_id
/// PUT    /{project_id}/pages/{page_id}/panels/{panel_id} -> panel::update
/// DELETE /{project_id}/pages/{page_id}/panels/{panel_id} -> panel::delete
/// ```
pub fn router() -> Router<AppState> {
    let panel_routes = Router::new()
        .route("/", get(panel::list_by_page).post(panel::create))
        .route(
            "/{panel_id}",
            get(panel::get_by_id)
                .put(panel::update)
                .delete(panel::delete),
        );

    let page_routes = Router::new()
        .route("/", get(page::list_by_project).post(page::create))
        .route(
            "/{page_id}",
            get(page::get_by_id)
                .put(page::update)
                .delete(page::delete),
        )
        .nest("/{page_id}/panels", panel_routes);

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{project_id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .nest("/{project_id}/pages", page_routes)
}
