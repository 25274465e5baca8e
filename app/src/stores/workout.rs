//! Workout store
//!
//! Holds the completed history, at most one in-progress workout and the
//! statistics derived from the history.
//!
//! The in-progress slot is a small state machine:
//! - Idle (no current workout) --`start_workout`--> Active
//! - Active --`end_workout`--> Idle, with the workout prepended to history
//!
//! Every other mutation is a silent no-op while Idle.

use crate::services::compute_stats;
use chrono::{NaiveDate, Utc};
use fitness_tracker_shared::{
    new_id, seed, SetInput, SetUpdate, UserStats, Workout, WorkoutExercise, WorkoutSet,
};
use serde::{Deserialize, Serialize};

/// Persisted workout state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSnapshot {
    pub workouts: Vec<Workout>,
    pub current_workout: Option<Workout>,
    pub user_stats: UserStats,
}

/// Workout history and the current session
#[derive(Debug, Clone, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
    current: Option<Workout>,
    stats: UserStats,
}

impl WorkoutStore {
    /// Seeded history with initial statistics
    pub fn seeded() -> Self {
        Self {
            workouts: seed::workouts(),
            current: None,
            stats: UserStats::default(),
        }
    }

    pub fn from_snapshot(snapshot: WorkoutSnapshot) -> Self {
        Self {
            workouts: snapshot.workouts,
            current: snapshot.current_workout,
            stats: snapshot.user_stats,
        }
    }

    pub fn snapshot(&self) -> WorkoutSnapshot {
        WorkoutSnapshot {
            workouts: self.workouts.clone(),
            current_workout: self.current.clone(),
            user_stats: self.stats.clone(),
        }
    }

    /// Completed workouts, most recent first
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn workout_history(&self) -> &[Workout] {
        self.workouts()
    }

    pub fn workout_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn current_workout(&self) -> Option<&Workout> {
        self.current.as_ref()
    }

    pub fn user_stats(&self) -> &UserStats {
        &self.stats
    }

    /// Begin a new workout dated today
    ///
    /// An already active workout is discarded.
    pub fn start_workout(&mut self, name: impl Into<String>) -> &Workout {
        self.start_workout_on(name, Utc::now().date_naive())
    }

    pub fn start_workout_on(&mut self, name: impl Into<String>, date: NaiveDate) -> &Workout {
        self.current.insert(Workout {
            id: new_id(),
            name: name.into(),
            date,
            exercises: Vec::new(),
            notes: None,
            duration: 0,
            completed: false,
        })
    }

    /// Append an exercise entry; adding an exercise twice is a no-op
    pub fn add_exercise_to_workout(&mut self, exercise_id: &str) -> bool {
        let Some(current) = self.current.as_mut() else {
            return false;
        };
        if current.exercises.iter().any(|e| e.exercise_id == exercise_id) {
            return false;
        }
        current.exercises.push(WorkoutExercise {
            exercise_id: exercise_id.to_string(),
            sets: Vec::new(),
        });
        true
    }

    pub fn remove_exercise_from_workout(&mut self, exercise_id: &str) -> bool {
        let Some(current) = self.current.as_mut() else {
            return false;
        };
        let before = current.exercises.len();
        current.exercises.retain(|e| e.exercise_id != exercise_id);
        current.exercises.len() != before
    }

    /// Append a set to an exercise of the current workout
    ///
    /// Returns the new set id, or `None` when there is no current workout or
    /// the exercise is not part of it.
    pub fn add_set(&mut self, exercise_id: &str, input: SetInput) -> Option<String> {
        let entry = self
            .current
            .as_mut()?
            .exercises
            .iter_mut()
            .find(|e| e.exercise_id == exercise_id)?;

        let set = WorkoutSet {
            id: new_id(),
            exercise_id: exercise_id.to_string(),
            weight: input.weight,
            reps: input.reps,
            duration: input.duration,
            distance: input.distance,
            completed: false,
        };
        let id = set.id.clone();
        entry.sets.push(set);
        Some(id)
    }

    /// Overwrite the provided fields of a set in the current workout
    pub fn update_set(&mut self, set_id: &str, update: SetUpdate) -> bool {
        let Some(set) = self.find_set_mut(set_id) else {
            return false;
        };
        if let Some(weight) = update.weight {
            set.weight = Some(weight);
        }
        if let Some(reps) = update.reps {
            set.reps = Some(reps);
        }
        if let Some(duration) = update.duration {
            set.duration = Some(duration);
        }
        if let Some(distance) = update.distance {
            set.distance = Some(distance);
        }
        true
    }

    pub fn complete_set(&mut self, set_id: &str, completed: bool) -> bool {
        match self.find_set_mut(set_id) {
            Some(set) => {
                set.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Commit the current workout to history and recompute statistics
    ///
    /// `duration_minutes` is supplied by the caller since elapsed time is not
    /// tracked. Returns the committed workout, or `None` when Idle.
    pub fn end_workout(&mut self, notes: Option<String>, duration_minutes: u32) -> Option<&Workout> {
        self.end_workout_on(notes, duration_minutes, Utc::now().date_naive())
    }

    pub fn end_workout_on(
        &mut self,
        notes: Option<String>,
        duration_minutes: u32,
        today: NaiveDate,
    ) -> Option<&Workout> {
        let mut workout = self.current.take()?;
        workout.notes = notes;
        workout.completed = true;
        workout.duration = duration_minutes;

        self.workouts.insert(0, workout);
        self.update_stats_on(today);
        self.workouts.first()
    }

    /// Recompute statistics from the full history
    pub fn update_stats(&mut self) -> &UserStats {
        self.update_stats_on(Utc::now().date_naive())
    }

    pub fn update_stats_on(&mut self, today: NaiveDate) -> &UserStats {
        self.stats = compute_stats(&self.workouts, today);
        &self.stats
    }

    fn find_set_mut(&mut self, set_id: &str) -> Option<&mut WorkoutSet> {
        self.current
            .as_mut()?
            .exercises
            .iter_mut()
            .flat_map(|e| e.sets.iter_mut())
            .find(|s| s.id == set_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_tracker_shared::Rank;
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn active(name: &str) -> WorkoutStore {
        let mut store = WorkoutStore::default();
        store.start_workout_on(name, day(10));
        store
    }

    #[test]
    fn test_start_workout_is_empty_and_uncommitted() {
        let mut store = WorkoutStore::seeded();
        let workout = store.start_workout_on("Push Day", day(10)).clone();
        assert_eq!(workout.name, "Push Day");
        assert_eq!(workout.date, day(10));
        assert!(workout.exercises.is_empty());
        assert_eq!(workout.duration, 0);
        assert!(!workout.completed);
        assert_eq!(store.workouts().len(), 4);
    }

    #[test]
    fn test_mutations_are_noops_when_idle() {
        let mut store = WorkoutStore::seeded();
        assert!(!store.add_exercise_to_workout("1"));
        assert!(!store.remove_exercise_from_workout("1"));
        assert!(store.add_set("1", SetInput::strength(60.0, 5)).is_none());
        assert!(!store.complete_set("101", true));
        assert!(store.end_workout(None, 45).is_none());
        assert_eq!(store.workouts().len(), 4);
    }

    #[test]
    fn test_add_exercise_is_idempotent() {
        let mut store = active("Legs");
        assert!(store.add_exercise_to_workout("1"));
        assert!(!store.add_exercise_to_workout("1"));
        assert!(store.add_exercise_to_workout("8"));

        let ids: Vec<_> = store
            .current_workout()
            .unwrap()
            .exercises
            .iter()
            .map(|e| e.exercise_id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "8"]);
    }

    #[test]
    fn test_remove_missing_exercise_is_noop() {
        let mut store = active("Legs");
        store.add_exercise_to_workout("1");
        assert!(!store.remove_exercise_from_workout("2"));
        assert!(store.remove_exercise_from_workout("1"));
        assert!(store.current_workout().unwrap().exercises.is_empty());
    }

    #[test]
    fn test_add_set_requires_exercise_in_workout() {
        let mut store = active("Legs");
        store.add_exercise_to_workout("1");

        assert!(store.add_set("2", SetInput::strength(100.0, 5)).is_none());
        let id = store.add_set("1", SetInput::strength(100.0, 5)).unwrap();

        let entry = store.current_workout().unwrap().exercise("1").unwrap();
        assert_eq!(entry.sets.len(), 1);
        assert_eq!(entry.sets[0].id, id);
        assert_eq!(entry.sets[0].exercise_id, "1");
        assert_eq!(entry.sets[0].weight, Some(100.0));
        assert!(!entry.sets[0].completed);
    }

    #[test]
    fn test_complete_and_update_set() {
        let mut store = active("Cardio");
        store.add_exercise_to_workout("6");
        let id = store.add_set("6", SetInput::cardio(0, 0.0)).unwrap();

        assert!(store.complete_set(&id, true));
        assert!(store.update_set(
            &id,
            SetUpdate {
                duration: Some(1500),
                distance: Some(5000.0),
                ..Default::default()
            }
        ));
        assert!(!store.complete_set("missing", true));

        let set = &store.current_workout().unwrap().exercise("6").unwrap().sets[0];
        assert!(set.completed);
        assert_eq!(set.duration, Some(1500));
        assert_eq!(set.distance, Some(5000.0));
        assert_eq!(set.weight, None);

        assert!(store.complete_set(&id, false));
        assert!(!store.current_workout().unwrap().exercise("6").unwrap().sets[0].completed);
    }

    #[test]
    fn test_end_workout_commits_to_head_of_history() {
        let mut store = WorkoutStore::seeded();
        store.start_workout_on("Evening Lift", day(10));
        store.add_exercise_to_workout("3");
        store.add_set("3", SetInput::strength(80.0, 8));

        let committed = store
            .end_workout_on(Some("Solid".to_string()), 52, day(10))
            .cloned()
            .unwrap();

        assert!(store.current_workout().is_none());
        assert_eq!(store.workouts()[0], committed);
        assert_eq!(store.workouts().len(), 5);
        assert!(committed.completed);
        assert_eq!(committed.duration, 52);
        assert_eq!(committed.notes.as_deref(), Some("Solid"));
        assert_eq!(store.workout_by_id(&committed.id), Some(&committed));
        assert_eq!(store.user_stats().total_workouts, 5);
        assert_eq!(store.user_stats().streak_days, 1);
    }

    #[test]
    fn test_first_workout_scenario() {
        let mut store = WorkoutStore::default();
        store.start_workout_on("Full Body", day(10));
        store.add_exercise_to_workout("1");
        store.add_exercise_to_workout("2");
        store.add_set("1", SetInput::strength(10.0, 10));
        store.add_set("1", SetInput::strength(25.0, 4));
        store.add_set("2", SetInput::strength(50.0, 2));
        store.add_set("2", SetInput::default());
        store.add_set("2", SetInput::default());
        store.end_workout_on(None, 60, day(10));

        let stats = store.user_stats();
        assert_eq!(stats.total_workouts, 1);
        assert_eq!(stats.total_sets, 5);
        assert!((stats.total_weight - 300.0).abs() < f64::EPSILON);
        assert_eq!(stats.experience, 150);
        assert_eq!(stats.level, 2);
        assert_eq!(stats.rank, Rank::Beginner);
    }

    #[test]
    fn test_update_stats_is_idempotent() {
        let mut store = WorkoutStore::seeded();
        let first = store.update_stats_on(day(3)).clone();
        let second = store.update_stats_on(day(3)).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_round_trip_keeps_current_workout() {
        let mut store = active("Legs");
        store.add_exercise_to_workout("1");
        let restored = WorkoutStore::from_snapshot(store.snapshot());
        assert_eq!(restored.current_workout(), store.current_workout());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_repeated_add_keeps_single_entry(
            ids in prop::collection::vec(prop::sample::select(vec!["1", "2", "3", "6"]), 1..30)
        ) {
            let mut store = active("Mixed");
            for id in &ids {
                store.add_exercise_to_workout(id);
            }
            let exercises = &store.current_workout().unwrap().exercises;
            for id in &ids {
                let count = exercises.iter().filter(|e| e.exercise_id == *id).count();
                prop_assert_eq!(count, 1);
            }
        }
    }
}
