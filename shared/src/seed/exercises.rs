//! Exercise catalog

use super::users::unsplash;
use crate::models::{Difficulty, Exercise, ExerciseCategory};
use once_cell::sync::Lazy;

static CATALOG: Lazy<Vec<Exercise>> = Lazy::new(build_catalog);

/// The full exercise catalog
pub fn exercise_catalog() -> &'static [Exercise] {
    &CATALOG
}

/// Look up catalog metadata by exercise id
pub fn find_exercise(id: &str) -> Option<&'static Exercise> {
    CATALOG.iter().find(|e| e.id == id)
}

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: &str,
    name: &str,
    category: ExerciseCategory,
    target_muscles: &[&str],
    description: &str,
    form_tips: &[&str],
    difficulty: Difficulty,
    photo: &str,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        category,
        target_muscles: target_muscles.iter().map(|m| m.to_string()).collect(),
        description: description.to_string(),
        form_tips: form_tips.iter().map(|t| t.to_string()).collect(),
        difficulty,
        image_url: unsplash(photo),
    }
}

fn build_catalog() -> Vec<Exercise> {
    vec![
        exercise(
            "1",
            "Squat",
            ExerciseCategory::Strength,
            &["quadriceps", "hamstrings", "glutes", "core"],
            "A compound exercise that targets the muscles of the lower body.",
            &[
                "Keep your feet shoulder-width apart",
                "Keep your back straight",
                "Knees should track over toes",
                "Lower until thighs are parallel to ground",
                "Push through heels to return to standing",
            ],
            Difficulty::Beginner,
            "1566241142559-40e1dab266c6",
        ),
        exercise(
            "2",
            "Deadlift",
            ExerciseCategory::Strength,
            &["hamstrings", "glutes", "lower back", "traps"],
            "A compound exercise that targets the posterior chain muscles.",
            &[
                "Start with feet hip-width apart",
                "Grip the bar just outside your legs",
                "Keep your back flat and chest up",
                "Push through your heels",
                "Keep the bar close to your body throughout the movement",
            ],
            Difficulty::Intermediate,
            "1598575468023-f9472c9e1abe",
        ),
        exercise(
            "3",
            "Bench Press",
            ExerciseCategory::Strength,
            &["chest", "shoulders", "triceps"],
            "A compound exercise that targets the muscles of the upper body.",
            &[
                "Lie flat on the bench with feet on the ground",
                "Grip the bar slightly wider than shoulder-width",
                "Lower the bar to mid-chest",
                "Keep elbows at about 45 degrees from your body",
                "Push the bar straight up",
            ],
            Difficulty::Intermediate,
            "1534368786749-b63e05c92717",
        ),
        exercise(
            "4",
            "Pull-up",
            ExerciseCategory::Strength,
            &["lats", "biceps", "upper back"],
            "A compound exercise that targets the muscles of the upper back and arms.",
            &[
                "Grip the bar with hands slightly wider than shoulder-width",
                "Start from a dead hang",
                "Pull up until your chin is over the bar",
                "Lower with control",
                "Avoid swinging or kipping",
            ],
            Difficulty::Advanced,
            "1598971639058-fab3c3109a00",
        ),
        exercise(
            "5",
            "Overhead Press",
            ExerciseCategory::Strength,
            &["shoulders", "triceps", "upper chest"],
            "A compound exercise that targets the muscles of the shoulders and arms.",
            &[
                "Start with the bar at shoulder height",
                "Grip the bar slightly wider than shoulder-width",
                "Press the bar straight up over your head",
                "Keep your core tight and avoid arching your back",
                "Lower the bar with control",
            ],
            Difficulty::Intermediate,
            "1541534741688-6078c6bfb5c5",
        ),
        exercise(
            "6",
            "Running",
            ExerciseCategory::Cardio,
            &["quadriceps", "hamstrings", "calves", "core"],
            "A cardiovascular exercise that improves endurance and burns calories.",
            &[
                "Land midfoot, not on your heels",
                "Keep your back straight and chest up",
                "Swing arms at 90-degree angles",
                "Look ahead, not down at your feet",
                "Breathe rhythmically",
            ],
            Difficulty::Beginner,
            "1476480862126-209bfaa8edc8",
        ),
        exercise(
            "7",
            "Plank",
            ExerciseCategory::Strength,
            &["core", "shoulders", "back"],
            "An isometric core exercise that improves stability and posture.",
            &[
                "Place forearms on the ground with elbows under shoulders",
                "Keep your body in a straight line from head to heels",
                "Engage your core and glutes",
                "Don't let your hips sag or pike up",
                "Breathe normally throughout",
            ],
            Difficulty::Beginner,
            "1566241142559-40e1dab266c6",
        ),
        exercise(
            "8",
            "Lunges",
            ExerciseCategory::Strength,
            &["quadriceps", "hamstrings", "glutes", "calves"],
            "A unilateral exercise that targets the muscles of the lower body.",
            &[
                "Step forward with one leg",
                "Lower your body until both knees are bent at 90 degrees",
                "Keep your front knee over your ankle, not past your toes",
                "Keep your torso upright",
                "Push through your front heel to return to standing",
            ],
            Difficulty::Beginner,
            "1434682881908-b43d0467b798",
        ),
    ]
}
