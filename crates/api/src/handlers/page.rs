//! Handlers for pages, nested under `/projects/{project_id}/pages`.
//!
//! Every handler resolves the owning project first; page-level handlers
//! resolve the page within that project.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use inkpanel_core::error::CoreError;
use inkpanel_core::storyboard::{self, PAGE};
use inkpanel_core::types::EntityId;
use inkpanel_db::models::page::{CreatePage, Page, UpdatePage};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::ownership::{resolve_page, resolve_project};
use crate::response::{ApiResponse, DeleteData, ListData};
use crate::state::AppState;

/// Request body for creating a page. Page numbers may repeat within a project.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    #[validate(range(min = 1, message = "pageNumber must be a positive integer"))]
    pub page_number: i32,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub notes: Option<String>,
}

/// POST /api/v1/projects/{project_id}/pages
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(project_id): ApiPath<EntityId>,
    ValidJson(body): ValidJson<CreatePageRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Page>>)> {
    resolve_project(state.store.as_ref(), project_id, &user.user_id).await?;

    let input = CreatePage {
        project_id,
        page_number: body.page_number,
        title: body.title,
        thumbnail_url: body.thumbnail_url,
        notes: body.notes,
    };
    let page = state.store.create_page(&input).await?;

    tracing::info!(
        page_id = %page.id,
        %project_id,
        page_number = page.page_number,
        "Page created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(page))))
}

/// GET /api/v1/projects/{project_id}/pages
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(project_id): ApiPath<EntityId>,
) -> AppResult<Json<ApiResponse<ListData<Page>>>> {
    resolve_project(state.store.as_ref(), project_id, &user.user_id).await?;
    let pages = state.store.list_pages(project_id).await?;
    Ok(Json(ApiResponse::ok(pages.into())))
}

/// GET /api/v1/projects/{project_id}/pages/{page_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((project_id, id)): ApiPath<(EntityId, EntityId)>,
) -> AppResult<Json<ApiResponse<Page>>> {
    let page = resolve_page(state.store.as_ref(), id, project_id, &user.user_id).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/v1/projects/{project_id}/pages/{page_id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((project_id, id)): ApiPath<(EntityId, EntityId)>,
    ValidJson(input): ValidJson<UpdatePage>,
) -> AppResult<Json<ApiResponse<Page>>> {
    storyboard::ensure_has_changes(PAGE, &input)?;
    resolve_page(state.store.as_ref(), id, project_id, &user.user_id).await?;

    let page = state
        .store
        .update_page(id, project_id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: PAGE, id })?;

    tracing::info!(page_id = %id, %project_id, "Page updated");
    Ok(Json(ApiResponse::ok(page)))
}

/// DELETE /api/v1/projects/{project_id}/pages/{page_id}
///
/// Removes the page and every panel on it. Success does not depend on how
/// many panels existed.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((project_id, id)): ApiPath<(EntityId, EntityId)>,
) -> AppResult<Json<ApiResponse<DeleteData>>> {
    resolve_page(state.store.as_ref(), id, project_id, &user.user_id).await?;
    let panels_removed = state.store.delete_page(id).await?;

    tracing::info!(page_id = %id, %project_id, panels_removed, "Page deleted");
    Ok(Json(ApiResponse::ok(DeleteData::done())))
}
