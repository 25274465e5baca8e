//! Error types for the Fitness Tracker application
//!
//! Store operations themselves never fail: absent records are silent no-ops.
//! These errors surface at the controller boundary only.

use thiserror::Error;

/// Application-wide error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for controller commands
pub type AppResult<T> = Result<T, AppError>;
