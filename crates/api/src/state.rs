use std::sync::Arc;

use crate::config::ServerConfig;
use crate::editor::EditorSessions;
use crate::locks::EditLocks;
use crate::store::SeasonStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Season persistence backend.
    pub store: Arc<dyn SeasonStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Open editor sessions (selection state per operator).
    pub sessions: Arc<EditorSessions>,
    /// Serializes read-modify-write cycles per scope and year.
    pub locks: Arc<EditLocks>,
}

impl AppState {
    pub fn new(store: Arc<dyn SeasonStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            sessions: Arc::new(EditorSessions::new()),
            locks: Arc::new(EditLocks::new()),
        }
    }
}
