//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod page_repo;
pub mod panel_repo;
pub mod project_repo;

pub use page_repo::PageRepo;
pub use panel_repo::PanelRepo;
pub use project_repo::ProjectRepo;
