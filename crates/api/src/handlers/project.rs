//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use inkpanel_core::error::CoreError;
use inkpanel_core::storyboard::{self, PROJECT};
use inkpanel_core::types::EntityId;
use inkpanel_db::models::project::{CreateProject, Project, UpdateProject};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::ownership::resolve_project;
use crate::response::{ApiResponse, DeleteData, ListData};
use crate::state::AppState;

/// Request body for creating a project.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub format: Option<String>,
    pub target_audience: Option<String>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(body): ValidJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Project>>)> {
    let input = CreateProject {
        owner_user_id: user.user_id,
        title: body.title,
        description: body.description,
        genre: body.genre,
        format: body.format,
        target_audience: body.target_audience,
    };
    let project = state.store.create_project(&input).await?;

    tracing::info!(
        project_id = %project.id,
        user_id = %project.owner_user_id,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(project))))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<ListData<Project>>>> {
    let projects = state.store.list_projects_for_owner(&user.user_id).await?;
    Ok(Json(ApiResponse::ok(projects.into())))
}

/// GET /api/v1/projects/{project_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<EntityId>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let project = resolve_project(state.store.as_ref(), id, &user.user_id).await?;
    Ok(Json(ApiResponse::ok(project)))
}

/// PUT /api/v1/projects/{project_id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<EntityId>,
    ValidJson(input): ValidJson<UpdateProject>,
) -> AppResult<Json<ApiResponse<Project>>> {
    storyboard::ensure_has_changes(PROJECT, &input)?;
    resolve_project(state.store.as_ref(), id, &user.user_id).await?;

    let project = state
        .store
        .update_project(id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: PROJECT,
            id,
        })?;

    tracing::info!(project_id = %id, "Project updated");
    Ok(Json(ApiResponse::ok(project)))
}

/// DELETE /api/v1/projects/{project_id}
///
/// Removes the project with all of its pages and their panels.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<EntityId>,
) -> AppResult<Json<ApiResponse<DeleteData>>> {
    resolve_project(state.store.as_ref(), id, &user.user_id).await?;
    if !state.store.delete_project(id).await? {
        return Err(CoreError::NotFound {
            entity: PROJECT,
            id,
        }
        .into());
    }

    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(ApiResponse::ok(DeleteData::done())))
}
