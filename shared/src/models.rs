//! Data models for the Fitness Tracker application
//!
//! Field names are serialized in camelCase so persisted snapshots keep the
//! same blob shape the mobile client has always written.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Generate a fresh opaque identifier
///
/// Identifiers are never reused within a collection, even when two records
/// are created in the same instant.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// ============================================================================
// Users
// ============================================================================

/// Rank tier derived from a user's level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Rank {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

impl Rank {
    /// Map a level to its rank tier
    pub fn for_level(level: u32) -> Self {
        match level {
            l if l >= 30 => Rank::Elite,
            l if l >= 20 => Rank::Advanced,
            l if l >= 10 => Rank::Intermediate,
            _ => Rank::Beginner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Beginner => "Beginner",
            Rank::Intermediate => "Intermediate",
            Rank::Advanced => "Advanced",
            Rank::Elite => "Elite",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User account with profile and progression data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub level: u32,
    pub experience: u64,
    pub rank: Rank,
    pub join_date: NaiveDate,
    pub followers: u32,
    pub following: u32,
}

// ============================================================================
// Exercises
// ============================================================================

/// Exercise category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
    Balance,
    Functional,
}

/// Exercise difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Exercise catalog entry (read-only at runtime)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: ExerciseCategory,
    pub target_muscles: Vec<String>,
    pub description: String,
    pub form_tips: Vec<String>,
    pub difficulty: Difficulty,
    pub image_url: String,
}

// ============================================================================
// Workouts
// ============================================================================

/// A single set within a workout exercise
///
/// Strength sets carry weight/reps, cardio sets carry duration/distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    pub id: String,
    pub exercise_id: String,
    /// Weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Distance in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub completed: bool,
}

impl WorkoutSet {
    /// Volume contributed to the lifetime total weight
    ///
    /// Sets without a weight contribute nothing; a missing or zero rep count
    /// counts as a single rep.
    pub fn volume(&self) -> f64 {
        match self.weight {
            Some(weight) if weight != 0.0 => {
                let reps = self.reps.filter(|r| *r > 0).unwrap_or(1);
                weight * f64::from(reps)
            }
            _ => 0.0,
        }
    }
}

/// An exercise entry within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub exercise_id: String,
    pub sets: Vec<WorkoutSet>,
}

/// A workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub exercises: Vec<WorkoutExercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Duration in minutes
    pub duration: u32,
    pub completed: bool,
}

impl Workout {
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    pub fn exercise(&self, exercise_id: &str) -> Option<&WorkoutExercise> {
        self.exercises.iter().find(|e| e.exercise_id == exercise_id)
    }
}

/// Aggregate statistics derived from workout history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_workouts: u32,
    pub total_exercises: u32,
    pub total_sets: u32,
    /// Total lifted volume in kg
    pub total_weight: f64,
    pub streak_days: u32,
    pub level: u32,
    pub experience: u64,
    pub rank: Rank,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_workouts: 0,
            total_exercises: 0,
            total_sets: 0,
            total_weight: 0.0,
            streak_days: 0,
            level: 1,
            experience: 0,
            rank: Rank::Beginner,
        }
    }
}

// ============================================================================
// Social
// ============================================================================

/// Comment on a post; author fields are denormalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Feed post; author fields are denormalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub user_avatar: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<String>,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Form analysis
// ============================================================================

/// Kind of media submitted for form analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// Result of a form analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAnalysisResult {
    pub id: String,
    pub exercise_id: String,
    pub timestamp: DateTime<Utc>,
    /// Score between 0 and 100
    pub score: u8,
    pub feedback: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub media_type: MediaType,
}
