//! In-memory store for local runs and tests.
//!
//! All three tables sit behind a single lock, so a cascading delete is
//! observed either completely or not at all.

use async_trait::async_trait;
use chrono::Utc;
use inkpanel_core::storyboard::{PAGE, PROJECT};
use inkpanel_core::types::EntityId;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, StoreResult, StoryboardStore};
use crate::models::page::{CreatePage, Page, UpdatePage};
use crate::models::panel::{CreatePanel, Panel, UpdatePanel};
use crate::models::project::{CreateProject, Project, UpdateProject};

#[derive(Debug, Default)]
struct Tables {
    projects: Vec<Project>,
    pages: Vec<Page>,
    panels: Vec<Panel>,
}

/// Number of rows held in each table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub projects: usize,
    pub pages: usize,
    pub panels: usize,
}

/// [`StoryboardStore`] holding rows in process memory.
///
/// Rows are kept in insertion order; listing sorts them the same way the
/// PostgreSQL queries do.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current row count of every table.
    pub async fn row_counts(&self) -> RowCounts {
        let tables = self.tables.read().await;
        RowCounts {
            projects: tables.projects.len(),
            pages: tables.pages.len(),
            panels: tables.panels.len(),
        }
    }
}

/// Overwrite `slot` when the patch supplies a value.
fn patch<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}

/// Overwrite a nullable column when the patch supplies a value.
fn patch_opt<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if let Some(v) = value {
        *slot = Some(v.clone());
    }
}

#[async_trait]
impl StoryboardStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            owner_user_id: input.owner_user_id.clone(),
            title: input.title.clone(),
            description: input.description.clone(),
            genre: input.genre.clone(),
            format: input.format.clone(),
            target_audience: input.target_audience.clone(),
            created_at: now,
            updated_at: now,
        };
        self.tables.write().await.projects.push(project.clone());
        Ok(project)
    }

    async fn find_project_for_owner(
        &self,
        id: EntityId,
        owner_user_id: &str,
    ) -> StoreResult<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables
            .projects
            .iter()
            .find(|p| p.id == id && p.owner_user_id == owner_user_id)
            .cloned())
    }

    async fn list_projects_for_owner(&self, owner_user_id: &str) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;
        let mut projects: Vec<Project> = tables
            .projects
            .iter()
            .filter(|p| p.owner_user_id == owner_user_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(projects)
    }

    async fn update_project(
        &self,
        id: EntityId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        let mut tables = self.tables.write().await;
        let Some(project) = tables.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        patch(&mut project.title, &input.title);
        patch_opt(&mut project.description, &input.description);
        patch_opt(&mut project.genre, &input.genre);
        patch_opt(&mut project.format, &input.format);
        patch_opt(&mut project.target_audience, &input.target_audience);
        project.updated_at = Utc::now();
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: EntityId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let page_ids: Vec<EntityId> = tables
            .pages
            .iter()
            .filter(|p| p.project_id == id)
            .map(|p| p.id)
            .collect();
        tables.panels.retain(|panel| !page_ids.contains(&panel.page_id));
        tables.pages.retain(|page| page.project_id != id);

        let before = tables.projects.len();
        tables.projects.retain(|p| p.id != id);
        Ok(tables.projects.len() < before)
    }

    async fn create_page(&self, input: &CreatePage) -> StoreResult<Page> {
        let mut tables = self.tables.write().await;
        if !tables.projects.iter().any(|p| p.id == input.project_id) {
            return Err(StoreError::MissingParent {
                entity: PROJECT,
                id: input.project_id,
            });
        }

        let now = Utc::now();
        let page = Page {
            id: Uuid::new_v4(),
            project_id: input.project_id,
            page_number: input.page_number,
            title: input.title.clone(),
            thumbnail_url: input.thumbnail_url.clone(),
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.pages.push(page.clone());
        Ok(page)
    }

    async fn find_page_in_project(
        &self,
        id: EntityId,
        project_id: EntityId,
    ) -> StoreResult<Option<Page>> {
        let tables = self.tables.read().await;
        Ok(tables
            .pages
            .iter()
            .find(|p| p.id == id && p.project_id == project_id)
            .cloned())
    }

    async fn list_pages(&self, project_id: EntityId) -> StoreResult<Vec<Page>> {
        let tables = self.tables.read().await;
        let mut pages: Vec<Page> = tables
            .pages
            .iter()
            .filter(|p| p.project_id == project_id)
            .cloned()
            .collect();
        pages.sort_by(|a, b| {
            a.page_number
                .cmp(&b.page_number)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(pages)
    }

    async fn update_page(
        &self,
        id: EntityId,
        project_id: EntityId,
        input: &UpdatePage,
    ) -> StoreResult<Option<Page>> {
        let mut tables = self.tables.write().await;
        let Some(page) = tables
            .pages
            .iter_mut()
            .find(|p| p.id == id && p.project_id == project_id)
        else {
            return Ok(None);
        };
        patch(&mut page.page_number, &input.page_number);
        patch_opt(&mut page.title, &input.title);
        patch_opt(&mut page.thumbnail_url, &input.thumbnail_url);
        patch_opt(&mut page.notes, &input.notes);
        page.updated_at = Utc::now();
        Ok(Some(page.clone()))
    }

    async fn delete_page(&self, id: EntityId) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.panels.len();
        tables.panels.retain(|panel| panel.page_id != id);
        let removed = (before - tables.panels.len()) as u64;
        tables.pages.retain(|page| page.id != id);
        Ok(removed)
    }

    async fn create_panel(&self, input: &CreatePanel) -> StoreResult<Panel> {
        let mut tables = self.tables.write().await;
        if !tables.pages.iter().any(|p| p.id == input.page_id) {
            return Err(StoreError::MissingParent {
                entity: PAGE,
                id: input.page_id,
            });
        }

        let panel = Panel {
            id: Uuid::new_v4(),
            page_id: input.page_id,
            panel_index: input.panel_index,
            layout_json: input.layout_json.clone(),
            description: input.description.clone(),
            dialogue: input.dialogue.clone(),
            caption: input.caption.clone(),
            sound_effects: input.sound_effects.clone(),
            created_at: Utc::now(),
        };
        tables.panels.push(panel.clone());
        Ok(panel)
    }

    async fn find_panel_in_page(
        &self,
        id: EntityId,
        page_id: EntityId,
    ) -> StoreResult<Option<Panel>> {
        let tables = self.tables.read().await;
        Ok(tables
            .panels
            .iter()
            .find(|p| p.id == id && p.page_id == page_id)
            .cloned())
    }

    async fn list_panels(&self, page_id: EntityId) -> StoreResult<Vec<Panel>> {
        let tables = self.tables.read().await;
        let mut panels: Vec<Panel> = tables
            .panels
            .iter()
            .filter(|p| p.page_id == page_id)
            .cloned()
            .collect();
        panels.sort_by(|a, b| {
            a.panel_index
                .cmp(&b.panel_index)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(panels)
    }

    async fn update_panel(
        &self,
        id: EntityId,
        page_id: EntityId,
        input: &UpdatePanel,
    ) -> StoreResult<Option<Panel>> {
        let mut tables = self.tables.write().await;
        let Some(panel) = tables
            .panels
            .iter_mut()
            .find(|p| p.id == id && p.page_id == page_id)
        else {
            return Ok(None);
        };
        patch(&mut panel.panel_index, &input.panel_index);
        patch_opt(&mut panel.layout_json, &input.layout_json);
        patch_opt(&mut panel.description, &input.description);
        patch_opt(&mut panel.dialogue, &input.dialogue);
        patch_opt(&mut panel.caption, &input.caption);
        patch_opt(&mut panel.sound_effects, &input.sound_effects);
        Ok(Some(panel.clone()))
    }

    async fn delete_panel(&self, id: EntityId, page_id: EntityId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.panels.len();
        tables
            .panels
            .retain(|panel| !(panel.id == id && panel.page_id == page_id));
        Ok(tables.panels.len() < before)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
