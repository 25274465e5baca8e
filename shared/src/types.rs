//! Command input types
//!
//! Each mutation takes an explicit input type listing the fields it accepts,
//! instead of merging arbitrary partial records.

use crate::models::{ExerciseCategory, MediaType, User};
use secrecy::SecretString;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth
// ============================================================================

/// Login request
///
/// The password is carried but never compared against a stored credential.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into()),
        }
    }
}

/// Profile fields a user may edit
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 3, max = 30))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(url)]
    pub avatar: Option<String>,
    #[validate(length(max = 280))]
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.avatar.is_none() && self.bio.is_none()
    }

    /// Merge the provided fields into `user`
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = avatar;
        }
        if let Some(bio) = self.bio {
            user.bio = Some(bio);
        }
    }
}

// ============================================================================
// Workouts
// ============================================================================

/// Values for a new set
///
/// Supplying the fields that fit the exercise category is the caller's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct SetInput {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub duration: Option<u32>,
    pub distance: Option<f64>,
}

impl SetInput {
    pub fn strength(weight: f64, reps: u32) -> Self {
        Self {
            weight: Some(weight),
            reps: Some(reps),
            ..Default::default()
        }
    }

    pub fn cardio(duration_secs: u32, distance_m: f64) -> Self {
        Self {
            duration: Some(duration_secs),
            distance: Some(distance_m),
            ..Default::default()
        }
    }

    /// Zeroed set matching the fields an exercise category records
    pub fn for_category(category: ExerciseCategory) -> Self {
        match category {
            ExerciseCategory::Strength => Self::strength(0.0, 0),
            ExerciseCategory::Cardio => Self::cardio(0, 0.0),
            _ => Self::default(),
        }
    }
}

/// Field overwrites for an existing set; `None` leaves a field untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct SetUpdate {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub duration: Option<u32>,
    pub distance: Option<f64>,
}

// ============================================================================
// Social
// ============================================================================

/// A post to be created; author fields are denormalized from the user
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewPost {
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub content: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub workout_id: Option<String>,
}

impl NewPost {
    pub fn by(user: &User, content: impl Into<String>) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            user_avatar: user.avatar.clone(),
            content: content.into(),
            image_url: None,
            video_url: None,
            workout_id: None,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_video(mut self, video_url: impl Into<String>) -> Self {
        self.video_url = Some(video_url.into());
        self
    }

    pub fn with_workout(mut self, workout_id: impl Into<String>) -> Self {
        self.workout_id = Some(workout_id.into());
        self
    }
}

/// A comment to be added to a post
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewComment {
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub content: String,
}

impl NewComment {
    pub fn by(user: &User, content: impl Into<String>) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            user_avatar: user.avatar.clone(),
            content: content.into(),
        }
    }
}

/// Optional attachments for a post created through the controller
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostAttachments {
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub workout_id: Option<String>,
}

// ============================================================================
// Form analysis
// ============================================================================

/// A finished analysis to be recorded
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewAnalysisResult {
    pub exercise_id: String,
    pub score: u8,
    pub feedback: Vec<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub media_type: MediaType,
}
