use super::date;
use crate::models::{Workout, WorkoutExercise, WorkoutSet};

fn lift(id: &str, exercise_id: &str, weight: Option<f64>, reps: u32) -> WorkoutSet {
    WorkoutSet {
        id: id.to_string(),
        exercise_id: exercise_id.to_string(),
        weight,
        reps: Some(reps),
        duration: None,
        distance: None,
        completed: true,
    }
}

fn timed(id: &str, exercise_id: &str, duration: u32, distance: Option<f64>) -> WorkoutSet {
    WorkoutSet {
        id: id.to_string(),
        exercise_id: exercise_id.to_string(),
        weight: None,
        reps: None,
        duration: Some(duration),
        distance,
        completed: true,
    }
}

fn entry(exercise_id: &str, sets: Vec<WorkoutSet>) -> WorkoutExercise {
    WorkoutExercise {
        exercise_id: exercise_id.to_string(),
        sets,
    }
}

/// Completed workout history
pub fn workouts() -> Vec<Workout> {
    vec![
        Workout {
            id: "1".to_string(),
            name: "Full Body Strength".to_string(),
            date: date(2023, 6, 15),
            exercises: vec![
                entry(
                    "1",
                    vec![
                        lift("101", "1", Some(60.0), 10),
                        lift("102", "1", Some(65.0), 8),
                        lift("103", "1", Some(70.0), 6),
                    ],
                ),
                entry(
                    "2",
                    vec![
                        lift("104", "2", Some(100.0), 8),
                        lift("105", "2", Some(110.0), 6),
                        lift("106", "2", Some(120.0), 4),
                    ],
                ),
                entry(
                    "3",
                    vec![
                        lift("107", "3", Some(80.0), 10),
                        lift("108", "3", Some(85.0), 8),
                        lift("109", "3", Some(90.0), 6),
                    ],
                ),
            ],
            notes: Some("Felt strong today, increased weights on all exercises".to_string()),
            duration: 60,
            completed: true,
        },
        Workout {
            id: "2".to_string(),
            name: "Cardio & Core".to_string(),
            date: date(2023, 6, 17),
            exercises: vec![
                entry("6", vec![timed("110", "6", 1200, Some(3000.0))]),
                entry(
                    "7",
                    vec![
                        timed("111", "7", 60, None),
                        timed("112", "7", 60, None),
                        timed("113", "7", 60, None),
                    ],
                ),
            ],
            notes: Some("Good cardio session, maintained pace throughout".to_string()),
            duration: 45,
            completed: true,
        },
        Workout {
            id: "3".to_string(),
            name: "Upper Body Focus".to_string(),
            date: date(2023, 6, 19),
            exercises: vec![
                entry(
                    "3",
                    vec![
                        lift("114", "3", Some(80.0), 10),
                        lift("115", "3", Some(85.0), 8),
                        lift("116", "3", Some(90.0), 6),
                    ],
                ),
                entry(
                    "4",
                    vec![
                        lift("117", "4", None, 8),
                        lift("118", "4", None, 6),
                        lift("119", "4", None, 4),
                    ],
                ),
                entry(
                    "5",
                    vec![
                        lift("120", "5", Some(50.0), 10),
                        lift("121", "5", Some(55.0), 8),
                        lift("122", "5", Some(60.0), 6),
                    ],
                ),
            ],
            notes: Some("Shoulders feeling fatigued, but good session overall".to_string()),
            duration: 50,
            completed: true,
        },
        Workout {
            id: "4".to_string(),
            name: "Lower Body Focus".to_string(),
            date: date(2023, 6, 21),
            exercises: vec![
                entry(
                    "1",
                    vec![
                        lift("123", "1", Some(65.0), 10),
                        lift("124", "1", Some(70.0), 8),
                        lift("125", "1", Some(75.0), 6),
                    ],
                ),
                entry(
                    "2",
                    vec![
                        lift("126", "2", Some(110.0), 8),
                        lift("127", "2", Some(120.0), 6),
                        lift("128", "2", Some(130.0), 4),
                    ],
                ),
                entry(
                    "8",
                    vec![
                        lift("129", "8", Some(20.0), 12),
                        lift("130", "8", Some(25.0), 10),
                        lift("131", "8", Some(30.0), 8),
                    ],
                ),
            ],
            notes: Some("Legs are toast! Great session though.".to_string()),
            duration: 55,
            completed: true,
        },
    ]
}
