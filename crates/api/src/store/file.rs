//! JSON-file season store: one `{data_dir}/{scope}/{year}.json` per collection.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use staykit_core::season::SeasonDiff;
use staykit_core::types::{Season, SeasonCollection};

use super::{SeasonStore, StoreError};

pub struct FileSeasonStore {
    root: PathBuf,
}

impl FileSeasonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, scope: &str, year: i32) -> Result<PathBuf, StoreError> {
        // Scopes become directory names; refuse anything that could escape root.
        if scope.is_empty()
            || scope == "."
            || scope == ".."
            || scope.contains(['/', '\\', '\0'])
        {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid scope '{scope}'"),
            )));
        }
        Ok(self.root.join(scope).join(format!("{year}.json")))
    }

    async fn read(&self, path: &Path) -> Result<SeasonCollection, StoreError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SeasonCollection::new())
            }
            Err(e) => return Err(e.into()),
        };
        let seasons: Vec<Season> = serde_json::from_slice(&bytes)?;
        Ok(seasons.into_iter().map(|s| (s.id.clone(), s)).collect())
    }
}

#[async_trait]
impl SeasonStore for FileSeasonStore {
    async fn load(&self, scope: &str, year: i32) -> Result<SeasonCollection, StoreError> {
        let path = self.path_for(scope, year)?;
        self.read(&path).await
    }

    async fn save(
        &self,
        scope: &str,
        year: i32,
        seasons: &SeasonCollection,
        diff: &SeasonDiff,
    ) -> Result<(), StoreError> {
        if diff.is_empty() {
            return Ok(());
        }

        let path = self.path_for(scope, year)?;
        let mut stored = self.read(&path).await?;
        for id in &diff.upserted {
            if let Some(season) = seasons.get(id) {
                stored.insert(id.clone(), season.clone());
            }
        }
        for id in &diff.deleted {
            stored.remove(id);
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_vec_pretty(&stored.values().collect::<Vec<_>>())?;

        // Write then rename so readers never see a half-written file.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!(scope, year, path = %path.display(), "Season file written");
        Ok(())
    }
}
