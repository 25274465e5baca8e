//! Configuration management for the Fitness Tracker app
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FT__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub workout: WorkoutConfig,
}

/// Local snapshot storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per store
    pub data_dir: PathBuf,
    /// When false, snapshots are kept in memory only
    pub enabled: bool,
}

/// Simulated form analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Artificial processing latency
    pub delay_ms: u64,
    /// Fixed RNG seed for reproducible scores
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            seed: None,
        }
    }
}

impl AnalysisConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Workout session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutConfig {
    /// Lower bound of the placeholder duration, inclusive
    pub min_duration_minutes: u32,
    /// Upper bound of the placeholder duration, exclusive
    pub max_duration_minutes: u32,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            min_duration_minutes: 30,
            max_duration_minutes: 90,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: PathBuf::from("data"),
                enabled: true,
            },
            analysis: AnalysisConfig::default(),
            workout: WorkoutConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FT__ prefix)
            // e.g., FT__ANALYSIS__DELAY_MS=0 sets analysis.delay_ms
            .add_source(config::Environment::with_prefix("FT").separator("__"))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the stores cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.workout.min_duration_minutes >= self.workout.max_duration_minutes {
            anyhow::bail!(
                "workout.min_duration_minutes ({}) must be below workout.max_duration_minutes ({})",
                self.workout.min_duration_minutes,
                self.workout.max_duration_minutes
            );
        }
        Ok(())
    }

    /// Configuration for tests: in-memory storage and no analysis delay
    pub fn ephemeral() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: PathBuf::new(),
                enabled: false,
            },
            analysis: AnalysisConfig {
                delay_ms: 0,
                seed: Some(7),
            },
            workout: WorkoutConfig::default(),
        }
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
