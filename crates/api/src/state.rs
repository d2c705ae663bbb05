use std::sync::Arc;

use tracklist_db::store::TrackStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Track persistence (PostgreSQL or in-memory).
    pub store: Arc<dyn TrackStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
