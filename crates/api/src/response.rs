//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;
use staykit_core::season::SeasonDiff;
use staykit_core::types::{Season, SeasonCollection};

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload returned by every mutating season endpoint: the collection after
/// the change plus the ids that were written.
#[derive(Debug, Serialize)]
pub struct SeasonsChanged {
    pub seasons: Vec<Season>,
    pub changes: SeasonDiff,
}

impl SeasonsChanged {
    pub fn new(seasons: SeasonCollection, changes: SeasonDiff) -> Self {
        Self {
            seasons: seasons.into_values().collect(),
            changes,
        }
    }
}
