use std::collections::HashMap;

use async_trait::async_trait;
use staykit_core::season::SeasonDiff;
use staykit_core::types::SeasonCollection;
use tokio::sync::RwLock;

use super::{SeasonStore, StoreError};

/// Process-local store, used for development and tests.
#[derive(Default)]
pub struct InMemorySeasonStore {
    collections: RwLock<HashMap<(String, i32), SeasonCollection>>,
}

impl InMemorySeasonStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeasonStore for InMemorySeasonStore {
    async fn load(&self, scope: &str, year: i32) -> Result<SeasonCollection, StoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(&(scope.to_string(), year))
            .cloned()
            .unwrap_or_default())
    }

    async fn save(
        &self,
        scope: &str,
        year: i32,
        seasons: &SeasonCollection,
        diff: &SeasonDiff,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let stored = collections.entry((scope.to_string(), year)).or_default();

        for id in &diff.upserted {
            if let Some(season) = seasons.get(id) {
                stored.insert(id.clone(), season.clone());
            }
        }
        for id in &diff.deleted {
            stored.remove(id);
        }
        Ok(())
    }
}
