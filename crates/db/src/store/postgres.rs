//! PostgreSQL-backed store delegating to the repositories.

use async_trait::async_trait;
use inkpanel_core::storyboard::{PAGE, PROJECT};
use inkpanel_core::types::EntityId;
use sqlx::PgPool;

use super::{StoreError, StoreResult, StoryboardStore};
use crate::models::page::{CreatePage, Page, UpdatePage};
use crate::models::panel::{CreatePanel, Panel, UpdatePanel};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::{PageRepo, PanelRepo, ProjectRepo};

/// [`StoryboardStore`] over a sqlx connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoryboardStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn find_project_for_owner(
        &self,
        id: EntityId,
        owner_user_id: &str,
    ) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_for_owner(&self.pool, id, owner_user_id).await?)
    }

    async fn list_projects_for_owner(&self, owner_user_id: &str) -> StoreResult<Vec<Project>> {
        Ok(ProjectRepo::list_for_owner(&self.pool, owner_user_id).await?)
    }

    async fn update_project(
        &self,
        id: EntityId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_project(&self, id: EntityId) -> StoreResult<bool> {
        Ok(ProjectRepo::delete_cascade(&self.pool, id).await?)
    }

    async fn create_page(&self, input: &CreatePage) -> StoreResult<Page> {
        PageRepo::create(&self.pool, input)
            .await
            .map_err(|err| StoreError::from_insert(err, PROJECT, input.project_id))
    }

    async fn find_page_in_project(
        &self,
        id: EntityId,
        project_id: EntityId,
    ) -> StoreResult<Option<Page>> {
        Ok(PageRepo::find_in_project(&self.pool, id, project_id).await?)
    }

    async fn list_pages(&self, project_id: EntityId) -> StoreResult<Vec<Page>> {
        Ok(PageRepo::list_for_project(&self.pool, project_id).await?)
    }

    async fn update_page(
        &self,
        id: EntityId,
        project_id: EntityId,
        input: &UpdatePage,
    ) -> StoreResult<Option<Page>> {
        Ok(PageRepo::update(&self.pool, id, project_id, input).await?)
    }

    async fn delete_page(&self, id: EntityId) -> StoreResult<u64> {
        Ok(PageRepo::delete_with_panels(&self.pool, id).await?)
    }

    async fn create_panel(&self, input: &CreatePanel) -> StoreResult<Panel> {
        PanelRepo::create(&self.pool, input)
            .await
            .map_err(|err| StoreError::from_insert(err, PAGE, input.page_id))
    }

    async fn find_panel_in_page(
        &self,
        id: EntityId,
        page_id: EntityId,
    ) -> StoreResult<Option<Panel>> {
        Ok(PanelRepo::find_in_page(&self.pool, id, page_id).await?)
    }

    async fn list_panels(&self, page_id: EntityId) -> StoreResult<Vec<Panel>> {
        Ok(PanelRepo::list_for_page(&self.pool, page_id).await?)
    }

    async fn update_panel(
        &self,
        id: EntityId,
        page_id: EntityId,
        input: &UpdatePanel,
    ) -> StoreResult<Option<Panel>> {
        Ok(PanelRepo::update(&self.pool, id, page_id, input).await?)
    }

    async fn delete_panel(&self, id: EntityId, page_id: EntityId) -> StoreResult<bool> {
        Ok(PanelRepo::delete(&self.pool, id, page_id).await?)
    }
}
