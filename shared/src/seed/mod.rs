//! Seed datasets
//!
//! Initial state for every store on first run. The exercise catalog doubles
//! as the static lookup table for exercise metadata at runtime.

mod exercises;
mod form_analysis;
mod posts;
mod users;
mod workouts;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub use exercises::{exercise_catalog, find_exercise};
pub use form_analysis::form_analysis_results;
pub use posts::posts;
pub use users::users;
pub use workouts::workouts;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let user_ids: HashSet<_> = users().into_iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), 4);

        let exercise_ids: HashSet<_> = exercise_catalog().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(exercise_ids.len(), 8);

        let workout_ids: HashSet<_> = workouts().into_iter().map(|w| w.id).collect();
        assert_eq!(workout_ids.len(), 4);

        let post_ids: HashSet<_> = posts().into_iter().map(|p| p.id).collect();
        assert_eq!(post_ids.len(), 4);
    }

    #[test]
    fn test_seed_references_resolve() {
        for workout in workouts() {
            for entry in &workout.exercises {
                assert!(find_exercise(&entry.exercise_id).is_some());
                assert!(entry.sets.iter().all(|s| s.exercise_id == entry.exercise_id));
            }
        }
        for result in form_analysis_results() {
            assert!(find_exercise(&result.exercise_id).is_some());
        }
        let user_ids: HashSet<_> = users().into_iter().map(|u| u.id).collect();
        for post in posts() {
            assert!(user_ids.contains(&post.user_id));
            assert!(post.comments.iter().all(|c| user_ids.contains(&c.user_id)));
        }
    }

    #[test]
    fn test_seed_timestamps_are_valid() {
        assert_eq!(timestamp(2023, 6, 15, 14, 30).to_rfc3339(), "2023-06-15T14:30:00+00:00");
        assert_eq!(date(2023, 6, 15).to_string(), "2023-06-15");
    }
}
