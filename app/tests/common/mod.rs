//! Common test utilities for integration tests
//!
//! Each test gets its own temp directory so file snapshots never leak
//! between tests.

#![allow(dead_code)]

use fitness_tracker_app::{config::AppConfig, repositories::Repositories, state::AppState};
use fitness_tracker_shared::LoginRequest;
use std::path::Path;
use tempfile::TempDir;

/// Test application wrapper
pub struct TestApp {
    pub state: AppState,
    pub dir: TempDir,
}

impl TestApp {
    /// Fresh state backed by JSON files in a temp directory
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let state = open_state(dir.path()).await;
        Self { state, dir }
    }

    /// Fresh state, logged in as `fitness_pro`
    pub async fn logged_in() -> Self {
        let mut app = Self::new().await;
        app.state
            .login(&LoginRequest::new("fitness_pro@example.com", "password"))
            .unwrap();
        app
    }

    /// Shut down and open a new state over the same files, like an app restart
    pub async fn restart(self) -> Self {
        let Self { state, dir } = self;
        state.shutdown().await.unwrap();
        let state = open_state(dir.path()).await;
        Self { state, dir }
    }

    /// Read a slot file as raw JSON
    pub fn read_slot(&self, slot: &str) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.dir.path().join(format!("{}.json", slot))).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

/// Test configuration: file storage in `dir`, no analysis delay, fixed seed
pub fn test_config(dir: &Path) -> AppConfig {
    let mut config = AppConfig::ephemeral();
    config.storage.enabled = true;
    config.storage.data_dir = dir.to_path_buf();
    config
}

async fn open_state(dir: &Path) -> AppState {
    AppState::with_repositories(test_config(dir), Repositories::json_files(dir)).await
}
