//! Per-`(scope, year)` edit locks.
//!
//! Every mutating request holds the lock for its collection across
//! load → engine call → save, so the engine always works on one snapshot
//! and two requests never interleave their writes.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default)]
pub struct EditLocks {
    locks: Mutex<HashMap<(String, i32), Arc<Mutex<()>>>>,
}

impl EditLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `scope`/`year`.
    ///
    /// Entries nobody holds or waits on are dropped on the way in, so the
    /// map only tracks collections that are being edited.
    pub async fn acquire(&self, scope: &str, year: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Held and queued locks keep a clone of the `Arc`.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry((scope.to_string(), year)).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of `(scope, year)` keys currently tracked.
    pub async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
