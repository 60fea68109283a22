//! Handlers for panels, nested under
//! `/projects/{project_id}/pages/{page_id}/panels`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use inkpanel_core::error::CoreError;
use inkpanel_core::storyboard::{self, PANEL};
use inkpanel_core::types::EntityId;
use inkpanel_db::models::panel::{CreatePanel, Panel, UpdatePanel};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{ApiPath, ValidJson};
use crate::middleware::auth::AuthUser;
use crate::ownership::{resolve_page, resolve_panel};
use crate::response::{ApiResponse, DeleteData, ListData};
use crate::state::AppState;

/// Request body for creating a panel.
///
/// `panel_index` may be any integer. `layout_json` is stored as given.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePanelRequest {
    pub panel_index: i32,
    pub layout_json: Option<String>,
    pub description: Option<String>,
    pub dialogue: Option<String>,
    pub caption: Option<String>,
    pub sound_effects: Option<String>,
}

/// POST /api/v1/projects/{project_id}/pages/{page_id}/panels
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((project_id, page_id)): ApiPath<(EntityId, EntityId)>,
    ValidJson(body): ValidJson<CreatePanelRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Panel>>)> {
    resolve_page(state.store.as_ref(), page_id, project_id, &user.user_id).await?;

    let input = CreatePanel {
        page_id,
        panel_index: body.panel_index,
        layout_json: body.layout_json,
        description: body.description,
        dialogue: body.dialogue,
        caption: body.caption,
        sound_effects: body.sound_effects,
    };
    let panel = state.store.create_panel(&input).await?;

    tracing::info!(
        panel_id = %panel.id,
        %page_id,
        panel_index = panel.panel_index,
        "Panel created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(panel))))
}

/// GET /api/v1/projects/{project_id}/pages/{page_id}/panels
pub async fn list_by_page(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((project_id, page_id)): ApiPath<(EntityId, EntityId)>,
) -> AppResult<Json<ApiResponse<ListData<Panel>>>> {
    resolve_page(state.store.as_ref(), page_id, project_id, &user.user_id).await?;
    let panels = state.store.list_panels(page_id).await?;
    Ok(Json(ApiResponse::ok(panels.into())))
}

/// GET /api/v1/projects/{project_id}/pages/{page_id}/panels/{panel_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((project_id, page_id, id)): ApiPath<(EntityId, EntityId, EntityId)>,
) -> AppResult<Json<ApiResponse<Panel>>> {
    let panel = resolve_panel(
        state.store.as_ref(),
        id,
        page_id,
        project_id,
        &user.user_id,
    )
    .await?;
    Ok(Json(ApiResponse::ok(panel)))
}

/// PUT /api/v1/projects/{project_id}/pages/{page_id}/panels/{panel_id}
///
/// The scoped update doubles as the panel existence check.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((project_id, page_id, id)): ApiPath<(EntityId, EntityId, EntityId)>,
    ValidJson(input): ValidJson<UpdatePanel>,
) -> AppResult<Json<ApiResponse<Panel>>> {
    storyboard::ensure_has_changes(PANEL, &input)?;
    resolve_page(state.store.as_ref(), page_id, project_id, &user.user_id).await?;

    let panel = state
        .store
        .update_panel(id, page_id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: PANEL, id })?;

    tracing::info!(panel_id = %id, %page_id, "Panel updated");
    Ok(Json(ApiResponse::ok(panel)))
}

/// DELETE /api/v1/projects/{project_id}/pages/{page_id}/panels/{panel_id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((project_id, page_id, id)): ApiPath<(EntityId, EntityId, EntityId)>,
) -> AppResult<Json<ApiResponse<DeleteData>>> {
    resolve_page(state.store.as_ref(), page_id, project_id, &user.user_id).await?;

    if !state.store.delete_panel(id, page_id).await? {
        return Err(CoreError::NotFound { entity: PANEL, id }.into());
    }

    tracing::info!(panel_id = %id, %page_id, "Panel deleted");
    Ok(Json(ApiResponse::ok(DeleteData::done())))
}
