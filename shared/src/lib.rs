//! Fitness Tracker Shared Library
//!
//! This crate contains the domain model, command inputs, validation helpers
//! and seed datasets used by the application stores.

pub mod errors;
pub mod models;
pub mod seed;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use types::*;
