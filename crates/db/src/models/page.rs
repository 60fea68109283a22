//! Page entity model and DTOs.

use inkpanel_core::storyboard::ChangeSet;
use inkpanel_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A page row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: EntityId,
    pub project_id: EntityId,
    pub page_number: i32,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new page under a resolved project.
#[derive(Debug, Clone)]
pub struct CreatePage {
    pub project_id: EntityId,
    pub page_number: i32,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing page. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePage {
    #[validate(range(min = 1, message = "pageNumber must be a positive integer"))]
    pub page_number: Option<i32>,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub notes: Option<String>,
}

impl ChangeSet for UpdatePage {
    fn is_empty(&self) -> bool {
        self.page_number.is_none()
            && self.title.is_none()
            && self.thumbnail_url.is_none()
            && self.notes.is_none()
    }
}
