//! Snapshot repositories
//!
//! Each store is persisted as one JSON document in a named slot. Stores are
//! loaded once at startup and written back by the background
//! [`SnapshotWriter`] after every mutating command.

pub mod file;
pub mod memory;
pub mod writer;

pub use file::JsonFileRepository;
pub use memory::MemoryRepository;
pub use writer::SnapshotWriter;

use crate::config::StorageConfig;
use crate::error::PersistenceResult;
use crate::stores::{AuthSnapshot, FormAnalysisSnapshot, SocialSnapshot, WorkoutSnapshot};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

pub const AUTH_SLOT: &str = "auth-storage";
pub const WORKOUT_SLOT: &str = "workout-storage";
pub const SOCIAL_SLOT: &str = "social-storage";
pub const FORM_ANALYSIS_SLOT: &str = "form-analysis-storage";

/// Durable storage for one store's snapshot
#[async_trait]
pub trait StateRepository<S>: Send + Sync
where
    S: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Slot name, used for file names and log fields
    fn slot(&self) -> &str;

    /// Read the stored snapshot, `None` when nothing was saved yet
    async fn load(&self) -> PersistenceResult<Option<S>>;

    /// Replace the stored snapshot
    async fn save(&self, state: &S) -> PersistenceResult<()>;
}

/// A snapshot of one store, tagged with its slot
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Auth(AuthSnapshot),
    Workout(WorkoutSnapshot),
    Social(SocialSnapshot),
    FormAnalysis(FormAnalysisSnapshot),
}

impl Snapshot {
    pub fn slot(&self) -> &'static str {
        match self {
            Snapshot::Auth(_) => AUTH_SLOT,
            Snapshot::Workout(_) => WORKOUT_SLOT,
            Snapshot::Social(_) => SOCIAL_SLOT,
            Snapshot::FormAnalysis(_) => FORM_ANALYSIS_SLOT,
        }
    }
}

/// One repository per store slot
#[derive(Clone)]
pub struct Repositories {
    pub auth: Arc<dyn StateRepository<AuthSnapshot>>,
    pub workout: Arc<dyn StateRepository<WorkoutSnapshot>>,
    pub social: Arc<dyn StateRepository<SocialSnapshot>>,
    pub form_analysis: Arc<dyn StateRepository<FormAnalysisSnapshot>>,
}

impl Repositories {
    /// JSON files under `dir`, one per slot
    pub fn json_files(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            auth: Arc::new(JsonFileRepository::new(dir, AUTH_SLOT)),
            workout: Arc::new(JsonFileRepository::new(dir, WORKOUT_SLOT)),
            social: Arc::new(JsonFileRepository::new(dir, SOCIAL_SLOT)),
            form_analysis: Arc::new(JsonFileRepository::new(dir, FORM_ANALYSIS_SLOT)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            auth: Arc::new(MemoryRepository::new(AUTH_SLOT)),
            workout: Arc::new(MemoryRepository::new(WORKOUT_SLOT)),
            social: Arc::new(MemoryRepository::new(SOCIAL_SLOT)),
            form_analysis: Arc::new(MemoryRepository::new(FORM_ANALYSIS_SLOT)),
        }
    }

    pub fn from_config(storage: &StorageConfig) -> Self {
        if storage.enabled {
            Self::json_files(&storage.data_dir)
        } else {
            Self::in_memory()
        }
    }

    /// Route a snapshot to the repository for its slot
    pub async fn save(&self, snapshot: &Snapshot) -> PersistenceResult<()> {
        match snapshot {
            Snapshot::Auth(state) => self.auth.save(state).await,
            Snapshot::Workout(state) => self.workout.save(state).await,
            Snapshot::Social(state) => self.social.save(state).await,
            Snapshot::FormAnalysis(state) => self.form_analysis.save(state).await,
        }
    }
}
