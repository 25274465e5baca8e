//! Workout statistics
//!
//! Statistics are always recomputed from the full history, never updated
//! incrementally, so recomputing twice yields identical results.

use chrono::NaiveDate;
use fitness_tracker_shared::{Rank, UserStats, Workout};
use std::collections::HashSet;

/// Experience granted per completed workout
pub const XP_PER_WORKOUT: u64 = 100;

/// Experience granted per logged set
pub const XP_PER_SET: u64 = 10;

/// Recompute aggregate statistics from workout history
///
/// `today` anchors the streak calculation.
pub fn compute_stats(workouts: &[Workout], today: NaiveDate) -> UserStats {
    let total_workouts = workouts.len() as u32;
    let mut total_exercises = 0u32;
    let mut total_sets = 0u32;
    let mut total_weight = 0.0f64;

    for workout in workouts {
        total_exercises += workout.exercises.len() as u32;
        for exercise in &workout.exercises {
            total_sets += exercise.sets.len() as u32;
            total_weight += exercise.sets.iter().map(|s| s.volume()).sum::<f64>();
        }
    }

    let experience = experience_for(total_workouts, total_sets);
    let level = level_for(experience);

    UserStats {
        total_workouts,
        total_exercises,
        total_sets,
        total_weight,
        streak_days: streak_days(workouts.iter().map(|w| w.date), today),
        level,
        experience,
        rank: Rank::for_level(level),
    }
}

pub fn experience_for(total_workouts: u32, total_sets: u32) -> u64 {
    u64::from(total_workouts) * XP_PER_WORKOUT + u64::from(total_sets) * XP_PER_SET
}

/// `floor(sqrt(experience / 100)) + 1`
pub fn level_for(experience: u64) -> u32 {
    (experience as f64 / 100.0).sqrt().floor() as u32 + 1
}

/// Workout streak anchored at today or yesterday
///
/// Zero unless there is a workout today or yesterday. Otherwise the streak
/// starts at one and gains a day for each consecutive workout day walking
/// back from yesterday.
pub fn streak_days(dates: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> u32 {
    let dates: HashSet<NaiveDate> = dates.into_iter().collect();
    let yesterday = today.pred_opt();

    let active = dates.contains(&today) || yesterday.is_some_and(|d| dates.contains(&d));
    if !active {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = yesterday;
    while let Some(day) = cursor.filter(|d| dates.contains(d)) {
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}
