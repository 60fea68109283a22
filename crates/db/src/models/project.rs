//! Project entity model and DTOs.

use inkpanel_core::storyboard::ChangeSet;
use inkpanel_core::types::{EntityId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub owner_user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub format: Option<String>,
    pub target_audience: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. The owner comes from the caller's identity.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub owner_user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub format: Option<String>,
    pub target_audience: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub format: Option<String>,
    pub target_audience: Option<String>,
}

impl ChangeSet for UpdateProject {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.genre.is_none()
            && self.format.is_none()
            && self.target_audience.is_none()
    }
}
