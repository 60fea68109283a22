//! Repository for the `pages` table.

use inkpanel_core::types::EntityId;
use sqlx::PgPool;

use crate::models::page::{CreatePage, Page, UpdatePage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, page_number, title, thumbnail_url, notes, created_at, updated_at";

/// Provides CRUD operations for pages.
pub struct PageRepo;

impl PageRepo {
    /// Insert a new page, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePage) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (project_id, page_number, title, thumbnail_url, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(input.project_id)
            .bind(input.page_number)
            .bind(&input.title)
            .bind(&input.thumbnail_url)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a page by ID, scoped to the project it must belong to.
    pub async fn find_in_project(
        pool: &PgPool,
        id: EntityId,
        project_id: EntityId,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1 AND project_id = $2");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List all pages of a project by page number, then creation time.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: EntityId,
    ) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages WHERE project_id = $1 ORDER BY page_number, created_at"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a page. Only non-`None` fields in `input` are applied and
    /// `updated_at` is bumped.
    ///
    /// Returns `None` if no page with `id` exists under `project_id`.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        project_id: EntityId,
        input: &UpdatePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET
                page_number = COALESCE($3, page_number),
                title = COALESCE($4, title),
                thumbnail_url = COALESCE($5, thumbnail_url),
                notes = COALESCE($6, notes),
                updated_at = NOW()
             WHERE id = $1 AND project_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(project_id)
            .bind(input.page_number)
            .bind(&input.title)
            .bind(&input.thumbnail_url)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a page and every panel on it in one transaction.
    ///
    /// Returns the number of panels removed (zero is fine).
    pub async fn delete_with_panels(pool: &PgPool, id: EntityId) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let panels = sqlx::query("DELETE FROM panels WHERE page_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(panels.rows_affected())
    }
}
