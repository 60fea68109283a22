//! Repository for the `panels` table.

use inkpanel_core::types::EntityId;
use sqlx::PgPool;

use crate::models::panel::{CreatePanel, Panel, UpdatePanel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, page_id, panel_index, layout_json, description, dialogue, caption, \
                       sound_effects, created_at";

/// Provides CRUD operations for panels.
pub struct PanelRepo;

impl PanelRepo {
    /// Insert a new panel, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePanel) -> Result<Panel, sqlx::Error> {
        let query = format!(
            "INSERT INTO panels
                (page_id, panel_index, layout_json, description, dialogue, caption, sound_effects)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Panel>(&query)
            .bind(input.page_id)
            .bind(input.panel_index)
            .bind(&input.layout_json)
            .bind(&input.description)
            .bind(&input.dialogue)
            .bind(&input.caption)
            .bind(&input.sound_effects)
            .fetch_one(pool)
            .await
    }

    /// Find a panel by ID, scoped to the page it must belong to.
    pub async fn find_in_page(
        pool: &PgPool,
        id: EntityId,
        page_id: EntityId,
    ) -> Result<Option<Panel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM panels WHERE id = $1 AND page_id = $2");
        sqlx::query_as::<_, Panel>(&query)
            .bind(id)
            .bind(page_id)
            .fetch_optional(pool)
            .await
    }

    /// List all panels of a page by panel index, then creation time.
    pub async fn list_for_page(pool: &PgPool, page_id: EntityId) -> Result<Vec<Panel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM panels WHERE page_id = $1 ORDER BY panel_index, created_at"
        );
        sqlx::query_as::<_, Panel>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    /// Update a panel. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no panel with `id` exists on `page_id`.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        page_id: EntityId,
        input: &UpdatePanel,
    ) -> Result<Option<Panel>, sqlx::Error> {
        let query = format!(
            "UPDATE panels SET
                panel_index = COALESCE($3, panel_index),
                layout_json = COALESCE($4, layout_json),
                description = COALESCE($5, description),
                dialogue = COALESCE($6, dialogue),
                caption = COALESCE($7, caption),
                sound_effects = COALESCE($8, sound_effects)
             WHERE id = $1 AND page_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Panel>(&query)
            .bind(id)
            .bind(page_id)
            .bind(input.panel_index)
            .bind(&input.layout_json)
            .bind(&input.description)
            .bind(&input.dialogue)
            .bind(&input.caption)
            .bind(&input.sound_effects)
            .fetch_optional(pool)
            .await
    }

    /// Delete a panel on a page. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: EntityId, page_id: EntityId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM panels WHERE id = $1 AND page_id = $2")
            .bind(id)
            .bind(page_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
