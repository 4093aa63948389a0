//! Persistence seam for season collections.
//!
//! The engine only ever sees whole `(scope, year)` snapshots; the store
//! loads them and writes back the ids a [`SeasonDiff`] names.

use async_trait::async_trait;
use staykit_core::season::SeasonDiff;
use staykit_core::types::SeasonCollection;

pub mod file;
pub mod memory;

pub use file::FileSeasonStore;
pub use memory::InMemorySeasonStore;

/// Errors raised by a [`SeasonStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored season data is unreadable: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Load/save operations supplied by the host for one tenant scope and year.
#[async_trait]
pub trait SeasonStore: Send + Sync {
    /// Every season stored for `scope` in `year`. Missing data is an empty
    /// collection, not an error.
    async fn load(&self, scope: &str, year: i32) -> Result<SeasonCollection, StoreError>;

    /// Persist the seasons `diff` names, taking their values from `seasons`.
    async fn save(
        &self,
        scope: &str,
        year: i32,
        seasons: &SeasonCollection,
        diff: &SeasonDiff,
    ) -> Result<(), StoreError>;
}
