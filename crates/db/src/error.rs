//! Store error type.

use inkpanel_core::types::EntityId;
use thiserror::Error;

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum StoreError {
    /// A child row was inserted under a parent that no longer exists.
    #[error("{entity} with id {id} does not exist")]
    MissingParent { entity: &'static str, id: EntityId },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Turn a foreign-key violation on insert into [`StoreError::MissingParent`].
    /// Any other database error passes through unchanged.
    pub fn from_insert(err: sqlx::Error, parent: &'static str, parent_id: EntityId) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
            {
                StoreError::MissingParent {
                    entity: parent,
                    id: parent_id,
                }
            }
            _ => StoreError::Database(err),
        }
    }
}
