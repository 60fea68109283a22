//! Request handlers for the storyboard hierarchy.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers authenticate via [`AuthUser`](crate::middleware::auth::AuthUser),
//! resolve the ownership chain, then delegate to the store.

pub mod page;
pub mod panel;
pub mod project;
