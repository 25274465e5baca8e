//! Integration tests for workout sessions

mod common;

use fitness_tracker_app::config::AppConfig;
use fitness_tracker_app::repositories::{MemoryRepository, Repositories, WORKOUT_SLOT};
use fitness_tracker_app::state::AppState;
use fitness_tracker_app::stores::WorkoutSnapshot;
use fitness_tracker_shared::{AppError, Rank, SetInput, SetUpdate};
use std::sync::Arc;

async fn empty_history() -> AppState {
    let empty = serde_json::to_string(&WorkoutSnapshot::default()).unwrap();
    let repos = Repositories {
        workout: Arc::new(MemoryRepository::with_contents(WORKOUT_SLOT, empty)),
        ..Repositories::in_memory()
    };
    AppState::with_repositories(AppConfig::ephemeral(), repos).await
}

#[tokio::test]
async fn test_first_workout_from_empty_history() {
    let mut state = empty_history().await;
    assert_eq!(state.user_stats().total_workouts, 0);

    state.start_workout("Leg Day").unwrap();
    assert!(state.add_exercise("1"));
    assert!(state.add_exercise("3"));

    for (weight, reps) in [(10.0, 10), (25.0, 4), (50.0, 2)] {
        state.add_set("1", SetInput::strength(weight, reps)).unwrap().unwrap();
    }
    state.add_set("3", SetInput::default()).unwrap().unwrap();
    state.add_set("3", SetInput::default()).unwrap().unwrap();

    let workout = state.end_workout(None).unwrap();
    assert_eq!(state.workout().workouts()[0].id, workout.id);
    assert!(state.workout().current_workout().is_none());

    let stats = state.user_stats();
    assert_eq!(stats.total_workouts, 1);
    assert_eq!(stats.total_exercises, 2);
    assert_eq!(stats.total_sets, 5);
    assert!((stats.total_weight - 300.0).abs() < 1e-9);
    assert_eq!(stats.experience, 150);
    assert_eq!(stats.level, 2);
    assert_eq!(stats.rank, Rank::Beginner);
    assert_eq!(stats.streak_days, 1);
}

#[tokio::test]
async fn test_duplicate_exercise_is_single_entry() {
    let mut state = empty_history().await;
    state.start_workout("Push").unwrap();

    assert!(state.add_exercise("3"));
    assert!(!state.add_exercise("3"));
    assert!(!state.add_exercise("3"));

    let current = state.workout().current_workout().unwrap();
    assert_eq!(current.exercises.len(), 1);
}

#[tokio::test]
async fn test_set_lifecycle() {
    let mut state = empty_history().await;
    state.start_workout("Cardio").unwrap();
    state.add_exercise("6");

    let set_id = state.add_default_set("6").unwrap().unwrap();
    let fresh = &state.workout().current_workout().unwrap().exercises[0].sets[0];
    assert_eq!(fresh.duration, Some(0));
    assert_eq!(fresh.weight, None);

    let updated = state
        .update_set(
            &set_id,
            SetUpdate {
                duration: Some(1200),
                distance: Some(5000.0),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(updated);
    assert!(state.complete_set(&set_id, true));
    assert!(!state.complete_set("missing", true));

    let set = &state.workout().current_workout().unwrap().exercises[0].sets[0];
    assert_eq!(set.duration, Some(1200));
    assert_eq!(set.distance, Some(5000.0));
    assert!(set.completed);
}

#[tokio::test]
async fn test_commands_without_session_are_noops() {
    let mut state = empty_history().await;
    assert!(!state.add_exercise("1"));
    assert!(!state.remove_exercise("1"));
    assert_eq!(state.add_set("1", SetInput::strength(20.0, 5)).unwrap(), None);
    assert!(state.end_workout(None).is_none());
    assert!(state.workout().workouts().is_empty());
}

#[tokio::test]
async fn test_blank_workout_name_rejected() {
    let mut state = empty_history().await;
    assert!(matches!(state.start_workout("   "), Err(AppError::Validation(_))));
    assert!(state.workout().current_workout().is_none());
}

#[tokio::test]
async fn test_restart_keeps_session_in_progress() {
    let mut app = common::TestApp::new().await;
    app.state.start_workout("Morning").unwrap();
    app.state.add_exercise("2");
    app.state.add_set("2", SetInput::strength(100.0, 5)).unwrap();

    let app = app.restart().await;
    let current = app.state.workout().current_workout().unwrap();
    assert_eq!(current.name, "Morning");
    assert_eq!(current.exercises[0].exercise_id, "2");
    assert_eq!(current.exercises[0].sets.len(), 1);
}

#[tokio::test]
async fn test_stats_recomputed_after_restart() {
    let mut app = common::TestApp::new().await;
    app.state.start_workout("Quick").unwrap();
    app.state.add_exercise("4");
    app.state.add_default_set("4").unwrap();
    app.state.end_workout(None).unwrap();
    let before = app.state.user_stats().clone();

    let app = app.restart().await;
    assert_eq!(app.state.workout().workouts().len(), 5);
    assert_eq!(app.state.user_stats(), &before);
}
