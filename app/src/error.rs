//! Persistence error handling
//!
//! Storage failures never reach store logic: the background writer logs and
//! drops them, and a slot that cannot be read falls back to seed data.

use thiserror::Error;

/// Errors raised by snapshot repositories
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Storage I/O error on {slot}: {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot serialization error on {slot}: {source}")]
    Serialization {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage writer has shut down")]
    WriterClosed,
}

impl PersistenceError {
    pub fn io(slot: impl Into<String>, source: std::io::Error) -> Self {
        PersistenceError::Io {
            slot: slot.into(),
            source,
        }
    }

    pub fn serialization(slot: impl Into<String>, source: serde_json::Error) -> Self {
        PersistenceError::Serialization {
            slot: slot.into(),
            source,
        }
    }
}

/// Result type alias for repository operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;
