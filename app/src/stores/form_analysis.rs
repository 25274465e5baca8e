//! Form analysis history store

use crate::services::AnalysisStrategy;
use chrono::Utc;
use fitness_tracker_shared::{new_id, seed, FormAnalysisResult, MediaType, NewAnalysisResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Persisted analysis state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAnalysisSnapshot {
    pub results: Vec<FormAnalysisResult>,
    pub is_analyzing: bool,
}

/// Analysis results, most recent first
#[derive(Debug, Clone, Default)]
pub struct FormAnalysisStore {
    results: Vec<FormAnalysisResult>,
    is_analyzing: bool,
}

impl FormAnalysisStore {
    pub fn seeded() -> Self {
        Self {
            results: seed::form_analysis_results(),
            is_analyzing: false,
        }
    }

    pub fn from_snapshot(snapshot: FormAnalysisSnapshot) -> Self {
        Self {
            results: snapshot.results,
            is_analyzing: snapshot.is_analyzing,
        }
    }

    pub fn snapshot(&self) -> FormAnalysisSnapshot {
        FormAnalysisSnapshot {
            results: self.results.clone(),
            is_analyzing: self.is_analyzing,
        }
    }

    pub fn results(&self) -> &[FormAnalysisResult] {
        &self.results
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    pub fn results_by_exercise_id(&self, exercise_id: &str) -> Vec<&FormAnalysisResult> {
        self.results.iter().filter(|r| r.exercise_id == exercise_id).collect()
    }

    pub fn latest_result(&self) -> Option<&FormAnalysisResult> {
        self.results.first()
    }

    pub fn start_analysis(&mut self, _exercise_id: &str) {
        self.is_analyzing = true;
    }

    pub fn stop_analysis(&mut self) {
        self.is_analyzing = false;
    }

    /// Record a finished analysis and clear the analyzing flag
    pub fn save_analysis_result(&mut self, input: NewAnalysisResult) -> &FormAnalysisResult {
        self.results.insert(
            0,
            FormAnalysisResult {
                id: new_id(),
                exercise_id: input.exercise_id,
                timestamp: Utc::now(),
                score: input.score,
                feedback: input.feedback,
                image_url: input.image_url,
                media_type: input.media_type,
            },
        );
        self.is_analyzing = false;
        &self.results[0]
    }

    /// Produce a simulated analysis after `delay` and prepend it to history
    ///
    /// Unknown exercise ids get generic feedback. Media type defaults to
    /// image when not given. The analyzing flag is raised for the duration;
    /// if the future is dropped mid-delay nothing is recorded and the flag
    /// stays set until [`stop_analysis`](Self::stop_analysis).
    pub async fn simulate_analysis(
        &mut self,
        exercise_id: &str,
        media_uri: Option<String>,
        media_type: Option<MediaType>,
        strategy: &dyn AnalysisStrategy,
        delay: Duration,
    ) -> FormAnalysisResult {
        self.start_analysis(exercise_id);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let media_type = media_type.unwrap_or_default();
        let assessment = strategy.assess(seed::find_exercise(exercise_id), media_type);

        let result = FormAnalysisResult {
            id: new_id(),
            exercise_id: exercise_id.to_string(),
            timestamp: Utc::now(),
            score: assessment.score,
            feedback: assessment.feedback,
            image_url: media_uri,
            media_type,
        };
        self.results.insert(0, result.clone());
        self.is_analyzing = false;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Assessment, RandomAnalysis};
    use fitness_tracker_shared::Exercise;

    struct FixedScore(u8);

    impl AnalysisStrategy for FixedScore {
        fn assess(&self, exercise: Option<&Exercise>, _media_type: MediaType) -> Assessment {
            Assessment {
                score: self.0,
                feedback: exercise.map(|e| vec![e.name.clone()]).unwrap_or_default(),
            }
        }
    }

    #[tokio::test]
    async fn test_simulate_analysis_prepends_result() {
        let mut store = FormAnalysisStore::seeded();
        let result = store
            .simulate_analysis(
                "1",
                Some("file:///squat.mp4".to_string()),
                Some(MediaType::Video),
                &FixedScore(88),
                Duration::ZERO,
            )
            .await;

        assert_eq!(store.results().len(), 5);
        assert_eq!(store.latest_result(), Some(&result));
        assert_eq!(result.score, 88);
        assert_eq!(result.feedback, vec!["Squat".to_string()]);
        assert_eq!(result.media_type, MediaType::Video);
        assert_eq!(result.image_url.as_deref(), Some("file:///squat.mp4"));
    }

    #[tokio::test]
    async fn test_media_type_defaults_to_image() {
        let mut store = FormAnalysisStore::default();
        let result = store
            .simulate_analysis("2", None, None, &FixedScore(70), Duration::ZERO)
            .await;
        assert_eq!(result.media_type, MediaType::Image);
        assert_eq!(result.image_url, None);
        assert!(!store.is_analyzing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_analysis_waits_for_delay() {
        let mut store = FormAnalysisStore::default();
        let started = tokio::time::Instant::now();
        store
            .simulate_analysis("1", None, None, &FixedScore(80), Duration::from_secs(2))
            .await;
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_analysis_records_nothing() {
        let mut store = FormAnalysisStore::seeded();
        let strategy = FixedScore(80);
        let pending = store.simulate_analysis("1", None, None, &strategy, Duration::from_secs(2));
        let outcome = tokio::time::timeout(Duration::from_millis(500), pending).await;

        assert!(outcome.is_err());
        assert_eq!(store.results().len(), 4);
        assert!(store.is_analyzing());
    }

    #[tokio::test]
    async fn test_each_call_adds_one_result() {
        let mut store = FormAnalysisStore::default();
        let strategy = RandomAnalysis::seeded(3);
        for n in 1..=10 {
            let media_type = if n % 2 == 0 { MediaType::Video } else { MediaType::Image };
            let result = store
                .simulate_analysis("5", None, Some(media_type), &strategy, Duration::ZERO)
                .await;
            assert_eq!(store.results().len(), n);
            match media_type {
                MediaType::Image => assert!((65..100).contains(&result.score)),
                MediaType::Video => assert!((75..100).contains(&result.score)),
            }
        }
    }

    #[test]
    fn test_analysis_flags_and_manual_results() {
        let mut store = FormAnalysisStore::seeded();
        store.start_analysis("3");
        assert!(store.is_analyzing());

        let saved = store
            .save_analysis_result(NewAnalysisResult {
                exercise_id: "3".to_string(),
                score: 90,
                feedback: vec!["Great bar path".to_string()],
                image_url: None,
                media_type: MediaType::Image,
            })
            .clone();

        assert!(!store.is_analyzing());
        assert_eq!(store.latest_result(), Some(&saved));
        assert_eq!(store.results_by_exercise_id("3").len(), 2);

        store.start_analysis("3");
        store.stop_analysis();
        assert!(!store.is_analyzing());
    }

    #[test]
    fn test_latest_result_empty() {
        assert!(FormAnalysisStore::default().latest_result().is_none());
    }
}
