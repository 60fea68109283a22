use std::sync::Arc;

use inkpanel_db::StoryboardStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project/page/panel storage (PostgreSQL or in-memory).
    pub store: Arc<dyn StoryboardStore>,
    /// Server configuration (JWT secret is read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
