//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO built by the API layer for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod page;
pub mod panel;
pub mod project;
