//! JSON file repository

use super::StateRepository;
use crate::error::{PersistenceError, PersistenceResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Stores a slot as `<dir>/<slot>.json`
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    dir: PathBuf,
    slot: String,
}

impl JsonFileRepository {
    pub fn new(dir: impl AsRef<Path>, slot: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            slot: slot.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.slot))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json.tmp", self.slot))
    }
}

#[async_trait]
impl<S> StateRepository<S> for JsonFileRepository
where
    S: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn slot(&self) -> &str {
        &self.slot
    }

    async fn load(&self) -> PersistenceResult<Option<S>> {
        let raw = match fs::read_to_string(self.path()).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PersistenceError::io(&self.slot, e)),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| PersistenceError::serialization(&self.slot, e))
    }

    async fn save(&self, state: &S) -> PersistenceResult<()> {
        let json = serde_json::to_vec_pretty(state)
            .map_err(|e| PersistenceError::serialization(&self.slot, e))?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PersistenceError::io(&self.slot, e))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| PersistenceError::io(&self.slot, e))?;
        fs::rename(&temp, self.path())
            .await
            .map_err(|e| PersistenceError::io(&self.slot, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::{WorkoutSnapshot, WorkoutStore};

    #[tokio::test]
    async fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path(), "workout-storage");
        let loaded: Option<WorkoutSnapshot> = repo.load().await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested"), "workout-storage");
        let snapshot = WorkoutStore::seeded().snapshot();

        repo.save(&snapshot).await.unwrap();
        assert!(repo.path().ends_with("nested/workout-storage.json"));

        let loaded: Option<WorkoutSnapshot> = repo.load().await.unwrap();
        assert_eq!(loaded, Some(snapshot));
    }

    #[tokio::test]
    async fn test_save_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path(), "workout-storage");

        let mut store = WorkoutStore::seeded();
        repo.save(&store.snapshot()).await.unwrap();
        store.start_workout("Evening");
        repo.save(&store.snapshot()).await.unwrap();

        let loaded: Option<WorkoutSnapshot> = repo.load().await.unwrap();
        assert_eq!(loaded.unwrap().current_workout.unwrap().name, "Evening");
        assert!(!dir.path().join("workout-storage.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path(), "social-storage");
        fs::write(repo.path(), "{ not json").await.unwrap();

        let result: PersistenceResult<Option<WorkoutSnapshot>> = repo.load().await;
        assert!(matches!(result, Err(PersistenceError::Serialization { .. })));
    }
}
