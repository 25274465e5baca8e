//! In-memory repository for tests and ephemeral runs

use super::StateRepository;
use crate::error::{PersistenceError, PersistenceResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Mutex;

/// Holds the serialized snapshot as a JSON string
///
/// Going through JSON keeps load/save behavior identical to the file
/// repository, including parse failures.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    slot: String,
    contents: Mutex<Option<String>>,
}

impl MemoryRepository {
    pub fn new(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            contents: Mutex::new(None),
        }
    }

    /// Pre-populate the slot with raw JSON
    pub fn with_contents(slot: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            contents: Mutex::new(Some(json.into())),
        }
    }

    /// Raw JSON currently stored
    pub fn contents(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<S> StateRepository<S> for MemoryRepository
where
    S: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn slot(&self) -> &str {
        &self.slot
    }

    async fn load(&self) -> PersistenceResult<Option<S>> {
        let Some(raw) = self.contents() else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| PersistenceError::serialization(&self.slot, e))
    }

    async fn save(&self, state: &S) -> PersistenceResult<()> {
        let json = serde_json::to_string(state)
            .map_err(|e| PersistenceError::serialization(&self.slot, e))?;
        *self.lock() = Some(json);
        Ok(())
    }
}
