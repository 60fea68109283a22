//! Repository for the `projects` table.

use inkpanel_core::types::EntityId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_user_id, title, description, genre, format, target_audience, \
                       created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `created_at` and `updated_at` both take the transaction timestamp, so
    /// they are equal on a fresh row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (owner_user_id, title, description, genre, format, target_audience)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.owner_user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.genre)
            .bind(&input.format)
            .bind(&input.target_audience)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID, scoped to its owner.
    ///
    /// A project owned by someone else is indistinguishable from a missing one.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: EntityId,
        owner_user_id: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND owner_user_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(owner_user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's projects, most recently created first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_user_id: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE owner_user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied and
    /// `updated_at` is bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: EntityId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                genre = COALESCE($4, genre),
                format = COALESCE($5, format),
                target_audience = COALESCE($6, target_audience),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.genre)
            .bind(&input.format)
            .bind(&input.target_audience)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project together with its pages and their panels.
    ///
    /// All three deletes run in one transaction. Returns `true` if the
    /// project row was removed.
    pub async fn delete_cascade(pool: &PgPool, id: EntityId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let panels = sqlx::query(
            "DELETE FROM panels WHERE page_id IN (SELECT id FROM pages WHERE project_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let pages = sqlx::query("DELETE FROM pages WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let project = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            project_id = %id,
            pages = pages.rows_affected(),
            panels = panels.rows_affected(),
            "Cascaded project delete"
        );

        Ok(project.rows_affected() > 0)
    }
}
