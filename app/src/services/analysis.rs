//! Form analysis scoring
//!
//! No real pose estimation happens here. [`RandomAnalysis`] produces a
//! placeholder score and samples canned feedback from the exercise's form
//! tips. Callers that need determinism supply their own strategy.

use fitness_tracker_shared::{Exercise, MediaType};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::Mutex;

/// Feedback used when the exercise is not in the catalog
pub const FALLBACK_FEEDBACK: [&str; 2] = ["Keep your form tight", "Focus on controlled movements"];

/// Score and feedback for one submission
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub score: u8,
    pub feedback: Vec<String>,
}

/// Strategy that turns a submission into an assessment
pub trait AnalysisStrategy: Send + Sync {
    /// `exercise` is `None` when the id is not in the catalog
    fn assess(&self, exercise: Option<&Exercise>, media_type: MediaType) -> Assessment;
}

/// Score range for a media type
///
/// Video gets a higher floor than a still image.
pub fn score_range(media_type: MediaType) -> Range<u8> {
    match media_type {
        MediaType::Image => 65..95,
        MediaType::Video => 75..100,
    }
}

/// Number of improvement points for a score
pub fn improvement_count(score: u8) -> usize {
    if score > 85 {
        1
    } else if score > 75 {
        2
    } else {
        3
    }
}

/// Encouraging phrases for an exercise
pub fn positive_pool(exercise: &Exercise, media_type: MediaType) -> Vec<String> {
    let mut pool = vec![format!("Good {} form overall", exercise.name.to_lowercase())];
    if let Some(muscle) = exercise.target_muscles.first() {
        pool.push(format!("Your {} engagement looks good", muscle));
    }
    pool.extend(
        [
            "Nice controlled movement",
            "Good tempo on the exercise",
            "Proper range of motion achieved",
        ]
        .map(String::from),
    );

    if media_type == MediaType::Video {
        pool.push("Video analysis provides better insights than static images".to_string());
        pool.push("Good consistency throughout the movement".to_string());
    }
    pool
}

/// Improvement phrases derived from the exercise's form tips
pub fn improvement_pool(exercise: &Exercise) -> Vec<String> {
    exercise
        .form_tips
        .iter()
        .map(|tip| format!("Try to {}", tip.to_lowercase()))
        .collect()
}

/// Random placeholder scoring
pub struct RandomAnalysis {
    rng: Mutex<StdRng>,
}

impl RandomAnalysis {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of assessments
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomAnalysis {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl AnalysisStrategy for RandomAnalysis {
    fn assess(&self, exercise: Option<&Exercise>, media_type: MediaType) -> Assessment {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let score = rng.gen_range(score_range(media_type));

        let Some(exercise) = exercise else {
            return Assessment {
                score,
                feedback: FALLBACK_FEEDBACK.map(String::from).to_vec(),
            };
        };

        let mut positives = positive_pool(exercise, media_type);
        positives.shuffle(&mut *rng);
        positives.truncate(rng.gen_range(1..=2));

        let mut improvements = improvement_pool(exercise);
        improvements.shuffle(&mut *rng);
        improvements.truncate(improvement_count(score));

        positives.extend(improvements);
        Assessment {
            score,
            feedback: positives,
        }
    }
}
