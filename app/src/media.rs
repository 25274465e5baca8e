//! Media selection seam
//!
//! The host platform owns camera and gallery access. The app only sees the
//! URI of what the user picked, or that they backed out.

use async_trait::async_trait;
use fitness_tracker_shared::MediaType;

/// A file chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedMedia {
    pub uri: String,
    pub media_type: MediaType,
}

/// Result of asking the user for media
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(PickedMedia),
    Cancelled,
}

/// Platform media library or camera
#[async_trait]
pub trait MediaPicker: Send + Sync {
    /// Ask the user for a file of the requested kind
    async fn pick(&self, media_type: MediaType) -> PickOutcome;
}

/// Picker that always returns the same file
///
/// Without a file it behaves like a user who always cancels.
#[derive(Debug, Clone, Default)]
pub struct StaticMediaPicker {
    uri: Option<String>,
}

impl StaticMediaPicker {
    pub fn returning(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
        }
    }

    pub fn cancelling() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MediaPicker for StaticMediaPicker {
    async fn pick(&self, media_type: MediaType) -> PickOutcome {
        match &self.uri {
            Some(uri) => PickOutcome::Picked(PickedMedia {
                uri: uri.clone(),
                media_type,
            }),
            None => PickOutcome::Cancelled,
        }
    }
}
