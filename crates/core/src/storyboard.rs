//! Storyboard hierarchy constants and update-payload rules.
//!
//! The hierarchy is strict: a project owns pages, a page owns panels. Field
//! level rules (non-empty titles, positive page numbers) are declared on the
//! request types with `validator`; the rules here apply to whole payloads.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Entity names (used in NotFound errors and log fields)
// ---------------------------------------------------------------------------

pub const PROJECT: &str = "Project";
pub const PAGE: &str = "Page";
pub const PANEL: &str = "Panel";

// ---------------------------------------------------------------------------
// Update payloads
// ---------------------------------------------------------------------------

/// A partial update where every field is optional.
pub trait ChangeSet {
    /// `true` when no mutable field was supplied.
    fn is_empty(&self) -> bool;
}

/// Reject an update payload that carries no mutable field.
///
/// An empty update is a caller error, not a no-op, so this runs before any
/// store access.
pub fn ensure_has_changes<T: ChangeSet>(entity: &str, changes: &T) -> Result<(), CoreError> {
    if changes.is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} update must include at least one field"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
