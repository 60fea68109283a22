//! Persistence layer for projects, pages and panels.
//!
//! - [`error`] -- [`StoreError`], returned by every store operation.
//! - [`models`] -- row structs and create/update DTOs.
//! - [`repositories`] -- zero-sized PostgreSQL repositories taking `&PgPool`.
//! - [`store`] -- the [`StoryboardStore`] seam used by the API, with a
//!   PostgreSQL and an in-memory implementation.

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub use error::StoreError;
pub use store::{MemoryStore, PgStore, StoreResult, StoryboardStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
