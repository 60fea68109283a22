//! Ownership-chain resolver.
//!
//! Walks user -> project -> page -> panel top-down before any page- or
//! panel-scoped operation. Every step filters by the parent the caller
//! claims, so a broken link anywhere fails closed with `NotFound`. A project
//! owned by someone else is reported exactly like a missing one.

use inkpanel_core::error::CoreError;
use inkpanel_core::storyboard::{PAGE, PANEL, PROJECT};
use inkpanel_core::types::EntityId;
use inkpanel_db::models::page::Page;
use inkpanel_db::models::panel::Panel;
use inkpanel_db::models::project::Project;
use inkpanel_db::StoryboardStore;

use crate::error::AppResult;

/// Load a project owned by `user_id`, or fail `NotFound`.
pub async fn resolve_project(
    store: &dyn StoryboardStore,
    project_id: EntityId,
    user_id: &str,
) -> AppResult<Project> {
    store
        .find_project_for_owner(project_id, user_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(%project_id, user_id, "Project not resolvable for caller");
            CoreError::NotFound {
                entity: PROJECT,
                id: project_id,
            }
            .into()
        })
}

/// Load a page of an owned project, or fail `NotFound`.
///
/// The project check runs first and its failure propagates unchanged.
pub async fn resolve_page(
    store: &dyn StoryboardStore,
    page_id: EntityId,
    project_id: EntityId,
    user_id: &str,
) -> AppResult<Page> {
    resolve_project(store, project_id, user_id).await?;

    store
        .find_page_in_project(page_id, project_id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: PAGE,
                id: page_id,
            }
            .into()
        })
}

/// Load a panel at the end of a fully owned chain, or fail `NotFound`.
pub async fn resolve_panel(
    store: &dyn StoryboardStore,
    panel_id: EntityId,
    page_id: EntityId,
    project_id: EntityId,
    user_id: &str,
) -> AppResult<Panel> {
    resolve_page(store, page_id, project_id, user_id).await?;

    store
        .find_panel_in_page(panel_id, page_id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: PANEL,
                id: panel_id,
            }
            .into()
        })
}
