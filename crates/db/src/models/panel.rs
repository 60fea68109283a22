//! Panel entity model and DTOs.
//!
//! Panels carry no `updated_at`; updates leave `created_at` as the only
//! timestamp. `layout_json` is stored verbatim and never parsed here.

use inkpanel_core::storyboard::ChangeSet;
use inkpanel_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A panel row from the `panels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub id: EntityId,
    pub page_id: EntityId,
    pub panel_index: i32,
    pub layout_json: Option<String>,
    pub description: Option<String>,
    pub dialogue: Option<String>,
    pub caption: Option<String>,
    pub sound_effects: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new panel under a resolved page.
#[derive(Debug, Clone)]
pub struct CreatePanel {
    pub page_id: EntityId,
    pub panel_index: i32,
    pub layout_json: Option<String>,
    pub description: Option<String>,
    pub dialogue: Option<String>,
    pub caption: Option<String>,
    pub sound_effects: Option<String>,
}

/// DTO for updating an existing panel. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePanel {
    pub panel_index: Option<i32>,
    pub layout_json: Option<String>,
    pub description: Option<String>,
    pub dialogue: Option<String>,
    pub caption: Option<String>,
    pub sound_effects: Option<String>,
}

impl ChangeSet for UpdatePanel {
    fn is_empty(&self) -> bool {
        self.panel_index.is_none()
            && self.layout_json.is_none()
            && self.description.is_none()
            && self.dialogue.is_none()
            && self.caption.is_none()
            && self.sound_effects.is_none()
    }
}
