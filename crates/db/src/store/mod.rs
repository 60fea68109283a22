//! The [`StoryboardStore`] trait and its implementations.
//!
//! Handlers only talk to the store through this trait, so the same ownership
//! checks run whether rows live in PostgreSQL ([`PgStore`]) or in process
//! memory ([`MemoryStore`]).
//!
//! Lookups that take a parent id are scoped by it: a row under a different
//! parent is reported as absent, never returned.

mod memory;
mod postgres;

use async_trait::async_trait;
use inkpanel_core::types::EntityId;

use crate::error::StoreError;
use crate::models::page::{CreatePage, Page, UpdatePage};
use crate::models::panel::{CreatePanel, Panel, UpdatePanel};
use crate::models::project::{CreateProject, Project, UpdateProject};

pub use memory::{MemoryStore, RowCounts};
pub use postgres::PgStore;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage interface for the project -> page -> panel hierarchy.
///
/// Implementations must be thread-safe. Multi-row deletes must be atomic.
/// Creating a page or panel under a parent that does not exist fails with
/// [`StoreError::MissingParent`] and inserts nothing.
#[async_trait]
pub trait StoryboardStore: Send + Sync + 'static {
    /// Check the backing storage is reachable.
    async fn ping(&self) -> StoreResult<()>;

    // Projects

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project>;

    /// Find a project by id owned by `owner_user_id`.
    async fn find_project_for_owner(
        &self,
        id: EntityId,
        owner_user_id: &str,
    ) -> StoreResult<Option<Project>>;

    async fn list_projects_for_owner(&self, owner_user_id: &str) -> StoreResult<Vec<Project>>;

    /// Apply a partial update and bump `updated_at`. `None` if the row is gone.
    async fn update_project(
        &self,
        id: EntityId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>>;

    /// Delete a project, its pages and their panels atomically.
    async fn delete_project(&self, id: EntityId) -> StoreResult<bool>;

    // Pages

    async fn create_page(&self, input: &CreatePage) -> StoreResult<Page>;

    async fn find_page_in_project(
        &self,
        id: EntityId,
        project_id: EntityId,
    ) -> StoreResult<Option<Page>>;

    async fn list_pages(&self, project_id: EntityId) -> StoreResult<Vec<Page>>;

    async fn update_page(
        &self,
        id: EntityId,
        project_id: EntityId,
        input: &UpdatePage,
    ) -> StoreResult<Option<Page>>;

    /// Delete a page and all of its panels atomically. Returns the number of
    /// panels removed.
    async fn delete_page(&self, id: EntityId) -> StoreResult<u64>;

    // Panels

    async fn create_panel(&self, input: &CreatePanel) -> StoreResult<Panel>;

    async fn find_panel_in_page(
        &self,
        id: EntityId,
        page_id: EntityId,
    ) -> StoreResult<Option<Panel>>;

    async fn list_panels(&self, page_id: EntityId) -> StoreResult<Vec<Panel>>;

    async fn update_panel(
        &self,
        id: EntityId,
        page_id: EntityId,
        input: &UpdatePanel,
    ) -> StoreResult<Option<Panel>>;

    /// Delete one panel on a page. `false` if nothing matched.
    async fn delete_panel(&self, id: EntityId, page_id: EntityId) -> StoreResult<bool>;
}
