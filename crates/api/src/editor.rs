//! Host-side editor sessions.
//!
//! Each operator editing a calendar gets a session holding their
//! [`Selection`] state machine. The engine stays stateless; this manager
//! owns the mutable selection between requests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use staykit_core::selection::Selection;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use uuid::Uuid;

/// One operator's selection for one scope.
#[derive(Debug, Clone, Serialize)]
pub struct EditorSession {
    pub id: Uuid,
    pub scope: String,
    pub selection: Selection,
    pub opened_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

impl EditorSession {
    /// Reset the idle timer.
    pub fn touch(&mut self) {
        self.last_seen_at = Utc::now();
    }
}

/// Manages all open editor sessions.
///
/// Each session sits behind its own `Mutex` so events for one session are
/// applied one at a time while different sessions proceed in parallel.
/// Designed to be wrapped in `Arc` and shared across the application.
#[derive(Default)]
pub struct EditorSessions {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<EditorSession>>>>,
}

impl EditorSessions {
    /// Create a new, empty session manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session on `scope`, starting idle in `year`.
    pub async fn open(&self, scope: &str, year: i32) -> EditorSession {
        let now = Utc::now();
        let session = EditorSession {
            id: Uuid::new_v4(),
            scope: scope.to_string(),
            selection: Selection::new(year),
            opened_at: now,
            last_seen_at: now,
        };
        self.sessions
            .write()
            .await
            .insert(session.id, Arc::new(Mutex::new(session.clone())));
        session
    }

    /// Snapshot of a session, if it is still open.
    pub async fn get(&self, id: Uuid) -> Option<EditorSession> {
        let session = self.lock(id).await?;
        Some((*session).clone())
    }

    /// Exclusive access to a session for one read-transition-write cycle.
    ///
    /// Other events for the same session wait until the guard is dropped.
    pub async fn lock(&self, id: Uuid) -> Option<OwnedMutexGuard<EditorSession>> {
        let session = self.sessions.read().await.get(&id).cloned()?;
        Some(session.lock_owned().await)
    }

    /// Close a session. Returns `false` if it did not exist.
    pub async fn close(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Drop sessions idle for longer than `max_idle`. Returns how many went.
    ///
    /// Sessions busy with an event are never idle and are kept.
    pub async fn prune_idle(&self, max_idle: Duration) -> usize {
        let max_idle =
            chrono::Duration::from_std(max_idle).unwrap_or_else(|_| chrono::Duration::days(36_500));
        let cutoff = Utc::now() - max_idle;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| match session.try_lock() {
            Ok(session) => session.last_seen_at >= cutoff,
            Err(_) => true,
        });
        before - sessions.len()
    }

    /// Return the current number of open sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
