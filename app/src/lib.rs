//! Fitness Tracker client state layer
//!
//! Stores for the session, workouts, social feed and form analysis, the
//! controller that drives them, and snapshot persistence.

pub mod config;
pub mod error;
pub mod media;
pub mod repositories;
pub mod services;
pub mod state;
pub mod stores;
pub mod telemetry;
