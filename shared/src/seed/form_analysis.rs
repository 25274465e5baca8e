use super::timestamp;
use super::users::unsplash;
use crate::models::{FormAnalysisResult, MediaType};
use chrono::{DateTime, Utc};

fn result(
    id: &str,
    exercise_id: &str,
    at: DateTime<Utc>,
    score: u8,
    feedback: &[&str],
    photo: &str,
) -> FormAnalysisResult {
    FormAnalysisResult {
        id: id.to_string(),
        exercise_id: exercise_id.to_string(),
        timestamp: at,
        score,
        feedback: feedback.iter().map(|f| f.to_string()).collect(),
        image_url: Some(unsplash(photo)),
        media_type: MediaType::Image,
    }
}

/// Past form-analysis results
pub fn form_analysis_results() -> Vec<FormAnalysisResult> {
    vec![
        result(
            "1",
            "1",
            timestamp(2023, 6, 15, 14, 30),
            85,
            &[
                "Good depth on your squat",
                "Knees are tracking well over toes",
                "Try to keep your chest up a bit more",
                "Weight is properly distributed through your heels",
            ],
            "1566241142559-40e1dab266c6",
        ),
        result(
            "2",
            "2",
            timestamp(2023, 6, 16, 15, 45),
            78,
            &[
                "Bar path is good, staying close to your body",
                "Your back could be a bit flatter at the start",
                "Good hip hinge movement",
                "Remember to fully lock out at the top",
            ],
            "1598575468023-f9472c9e1abe",
        ),
        result(
            "3",
            "3",
            timestamp(2023, 6, 17, 10, 15),
            92,
            &[
                "Great bar path",
                "Good arch in your back",
                "Elbows are at the right angle",
                "Full range of motion achieved",
            ],
            "1534368786749-b63e05c92717",
        ),
        result(
            "4",
            "8",
            timestamp(2023, 6, 18, 9, 30),
            75,
            &[
                "Good depth on your lunges",
                "Front knee is going a bit too far forward",
                "Try to keep your torso more upright",
                "Step length is appropriate",
            ],
            "1434682881908-b43d0467b798",
        ),
    ]
}
