//! Application state management
//!
//! [`AppState`] owns the four stores and is the only thing screens talk to.
//! Every command applies its mutation synchronously, so the new state is
//! visible on return, and then queues a snapshot of the touched store for the
//! background writer.

use crate::config::{AppConfig, WorkoutConfig};
use crate::error::PersistenceResult;
use crate::media::{MediaPicker, PickOutcome};
use crate::repositories::{Repositories, Snapshot, SnapshotWriter, StateRepository};
use crate::services::{AnalysisStrategy, RandomAnalysis};
use crate::stores::{AuthStore, FormAnalysisStore, SocialStore, WorkoutStore};
use fitness_tracker_shared::validation::{
    validate_comment_content, validate_email, validate_post_content, validate_set_distance, validate_set_weight,
    validate_workout_name,
};
use fitness_tracker_shared::{
    seed, AppError, AppResult, Comment, FormAnalysisResult, LoginRequest, MediaType, NewComment,
    NewPost, Post, PostAttachments, ProfileUpdate, SetInput, SetUpdate, User, UserStats, Workout,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use validator::Validate;

/// Composition root for the client state layer
pub struct AppState {
    config: Arc<AppConfig>,
    auth: AuthStore,
    workout: WorkoutStore,
    social: SocialStore,
    form_analysis: FormAnalysisStore,
    analysis: Arc<dyn AnalysisStrategy>,
    rng: StdRng,
    writer: SnapshotWriter,
    writer_task: JoinHandle<()>,
}

impl AppState {
    /// Build state from configuration, restoring persisted snapshots
    pub async fn bootstrap(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let repositories = Repositories::from_config(&config.storage);
        if config.storage.enabled {
            info!(data_dir = %config.storage.data_dir.display(), "Using file storage");
        } else {
            info!("Storage disabled, state will not survive restarts");
        }
        Ok(Self::with_repositories(config, repositories).await)
    }

    /// Build state over the given repositories
    ///
    /// A slot that is missing or unreadable starts from its seed data.
    /// Workout stats are always recomputed from history. An unusable workout
    /// duration range is replaced with the default one.
    pub async fn with_repositories(mut config: AppConfig, repositories: Repositories) -> Self {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Invalid workout settings, using defaults");
            config.workout = WorkoutConfig::default();
        }

        let auth = match load_slot(repositories.auth.as_ref()).await {
            Some(snapshot) => AuthStore::from_snapshot(snapshot),
            None => AuthStore::seeded(),
        };

        let mut workout = match load_slot(repositories.workout.as_ref()).await {
            Some(snapshot) => WorkoutStore::from_snapshot(snapshot),
            None => WorkoutStore::seeded(),
        };
        workout.update_stats();

        let social = match load_slot(repositories.social.as_ref()).await {
            Some(snapshot) => SocialStore::from_snapshot(snapshot),
            None => SocialStore::seeded(),
        };

        let mut form_analysis = match load_slot(repositories.form_analysis.as_ref()).await {
            Some(snapshot) => FormAnalysisStore::from_snapshot(snapshot),
            None => FormAnalysisStore::seeded(),
        };
        // an analysis interrupted by shutdown never completes
        form_analysis.stop_analysis();

        let (analysis, rng): (Arc<dyn AnalysisStrategy>, StdRng) = match config.analysis.seed {
            Some(seed) => (
                Arc::new(RandomAnalysis::seeded(seed)),
                StdRng::seed_from_u64(seed),
            ),
            None => (Arc::new(RandomAnalysis::from_entropy()), StdRng::from_entropy()),
        };

        let (writer, writer_task) = SnapshotWriter::spawn(repositories);

        Self {
            config: Arc::new(config),
            auth,
            workout,
            social,
            form_analysis,
            analysis,
            rng,
            writer,
            writer_task,
        }
    }

    /// Replace the form analysis strategy
    pub fn with_analysis_strategy(mut self, strategy: Arc<dyn AnalysisStrategy>) -> Self {
        self.analysis = strategy;
        self
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    #[inline]
    pub fn workout(&self) -> &WorkoutStore {
        &self.workout
    }

    #[inline]
    pub fn social(&self) -> &SocialStore {
        &self.social
    }

    #[inline]
    pub fn form_analysis(&self) -> &FormAnalysisStore {
        &self.form_analysis
    }

    pub fn current_user(&self) -> Option<&User> {
        self.auth.user()
    }

    pub fn user_stats(&self) -> &UserStats {
        self.workout.user_stats()
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Log in by email; a miss leaves the current session as it was
    pub fn login(&mut self, request: &LoginRequest) -> AppResult<User> {
        validate_email(&request.email).map_err(AppError::Validation)?;
        if !self.auth.login(request) {
            warn!("Login failed: unknown email");
            return Err(AppError::Unauthorized("Invalid email or password".to_string()));
        }
        self.persist_auth();

        let user = self.require_user()?.clone();
        info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.auth.user() {
            info!(user_id = %user.id, "User logged out");
        }
        self.auth.logout();
        self.persist_auth();
    }

    /// Merge the provided fields; an empty update changes nothing
    pub fn update_profile(&mut self, update: ProfileUpdate) -> AppResult<User> {
        update.validate()?;
        if update.is_empty() {
            return self.require_user().cloned();
        }
        if !self.auth.update_profile(update) {
            return Err(AppError::Unauthorized("Log in to edit your profile".to_string()));
        }
        self.persist_auth();

        let user = self.require_user()?.clone();
        debug!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    // ------------------------------------------------------------------
    // Workouts
    // ------------------------------------------------------------------

    /// Begin a session, discarding any uncommitted one
    pub fn start_workout(&mut self, name: &str) -> AppResult<Workout> {
        validate_workout_name(name).map_err(AppError::Validation)?;
        let workout = self.workout.start_workout(name.trim()).clone();
        self.persist_workout();
        debug!(workout_id = %workout.id, name = %workout.name, "Workout started");
        Ok(workout)
    }

    pub fn add_exercise(&mut self, exercise_id: &str) -> bool {
        let added = self.workout.add_exercise_to_workout(exercise_id);
        if added {
            self.persist_workout();
            debug!(exercise_id, "Exercise added to workout");
        }
        added
    }

    pub fn remove_exercise(&mut self, exercise_id: &str) -> bool {
        let removed = self.workout.remove_exercise_from_workout(exercise_id);
        if removed {
            self.persist_workout();
            debug!(exercise_id, "Exercise removed from workout");
        }
        removed
    }

    /// Add a set; `Ok(None)` when the exercise is not in the active session
    pub fn add_set(&mut self, exercise_id: &str, input: SetInput) -> AppResult<Option<String>> {
        check_measurements(input.weight, input.distance)?;
        let set_id = self.workout.add_set(exercise_id, input);
        if let Some(set_id) = &set_id {
            self.persist_workout();
            debug!(exercise_id, set_id = %set_id, "Set added");
        }
        Ok(set_id)
    }

    /// Add an empty set shaped for the exercise's category
    pub fn add_default_set(&mut self, exercise_id: &str) -> AppResult<Option<String>> {
        let exercise = seed::find_exercise(exercise_id)
            .ok_or_else(|| AppError::NotFound(format!("Exercise {}", exercise_id)))?;
        self.add_set(exercise_id, SetInput::for_category(exercise.category))
    }

    pub fn update_set(&mut self, set_id: &str, update: SetUpdate) -> AppResult<bool> {
        check_measurements(update.weight, update.distance)?;
        let updated = self.workout.update_set(set_id, update);
        if updated {
            self.persist_workout();
        }
        Ok(updated)
    }

    pub fn complete_set(&mut self, set_id: &str, completed: bool) -> bool {
        let changed = self.workout.complete_set(set_id, completed);
        if changed {
            self.persist_workout();
        }
        changed
    }

    /// Commit the active session with a placeholder duration
    pub fn end_workout(&mut self, notes: Option<String>) -> Option<Workout> {
        if self.workout.current_workout().is_none() {
            return None;
        }

        let range = self.config.workout.min_duration_minutes..self.config.workout.max_duration_minutes;
        let duration = self.rng.gen_range(range);
        let workout = self.workout.end_workout(notes, duration)?.clone();
        self.persist_workout();

        metrics::counter!("workouts_completed_total").increment(1);
        info!(
            workout_id = %workout.id,
            exercises = workout.exercises.len(),
            sets = workout.total_sets(),
            duration,
            "Workout completed"
        );
        Some(workout)
    }

    // ------------------------------------------------------------------
    // Social
    // ------------------------------------------------------------------

    pub fn create_post(&mut self, content: &str, attachments: PostAttachments) -> AppResult<Post> {
        let content = validate_post_content(content).map_err(AppError::Validation)?;
        let user = self.require_user()?;

        let input = NewPost {
            image_url: attachments.image_url,
            video_url: attachments.video_url,
            workout_id: attachments.workout_id,
            ..NewPost::by(user, content)
        };
        let post = self.social.create_post(input).clone();
        self.persist_social();

        metrics::counter!("posts_created_total").increment(1);
        info!(post_id = %post.id, user_id = %post.user_id, "Post created");
        Ok(post)
    }

    pub fn add_comment(&mut self, post_id: &str, content: &str) -> AppResult<Comment> {
        let content = validate_comment_content(content).map_err(AppError::Validation)?;
        let input = NewComment::by(self.require_user()?, content);

        let comment = self
            .social
            .add_comment(post_id, input)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Post {}", post_id)))?;
        self.persist_social();

        debug!(post_id, comment_id = %comment.id, "Comment added");
        Ok(comment)
    }

    pub fn like_post(&mut self, post_id: &str) -> Option<u32> {
        let likes = self.social.like_post(post_id)?;
        self.persist_social();
        Some(likes)
    }

    pub fn unlike_post(&mut self, post_id: &str) -> Option<u32> {
        let likes = self.social.unlike_post(post_id)?;
        self.persist_social();
        Some(likes)
    }

    // ------------------------------------------------------------------
    // Form analysis
    // ------------------------------------------------------------------

    /// Run the simulated analysis on already-selected media
    pub async fn analyze_form(
        &mut self,
        exercise_id: &str,
        media_uri: Option<String>,
        media_type: Option<MediaType>,
    ) -> FormAnalysisResult {
        debug!(exercise_id, "Form analysis started");
        let delay = self.config.analysis.delay();
        let result = self
            .form_analysis
            .simulate_analysis(exercise_id, media_uri, media_type, self.analysis.as_ref(), delay)
            .await;
        self.persist_form_analysis();

        metrics::counter!("form_analyses_total").increment(1);
        info!(
            result_id = %result.id,
            exercise_id,
            score = result.score,
            "Form analysis completed"
        );
        result
    }

    /// Ask the picker for media and analyze it; `None` if the user cancels
    pub async fn analyze_picked(
        &mut self,
        exercise_id: &str,
        media_type: MediaType,
        picker: &dyn MediaPicker,
    ) -> Option<FormAnalysisResult> {
        match picker.pick(media_type).await {
            PickOutcome::Picked(media) => Some(
                self.analyze_form(exercise_id, Some(media.uri), Some(media.media_type))
                    .await,
            ),
            PickOutcome::Cancelled => {
                debug!(exercise_id, "Media selection cancelled");
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Wait for every queued snapshot to be written
    pub async fn flush(&self) -> PersistenceResult<()> {
        self.writer.flush().await
    }

    /// Flush and stop the background writer
    pub async fn shutdown(self) -> PersistenceResult<()> {
        self.writer.flush().await?;
        let Self {
            writer,
            writer_task,
            ..
        } = self;
        drop(writer);
        if let Err(e) = writer_task.await {
            warn!(error = %e, "Snapshot writer task failed");
        }
        Ok(())
    }

    fn require_user(&self) -> AppResult<&User> {
        self.auth
            .user()
            .ok_or_else(|| AppError::Unauthorized("You must be logged in".to_string()))
    }

    fn persist_auth(&self) {
        self.writer.enqueue(Snapshot::Auth(self.auth.snapshot()));
    }

    fn persist_workout(&self) {
        self.writer.enqueue(Snapshot::Workout(self.workout.snapshot()));
    }

    fn persist_social(&self) {
        self.writer.enqueue(Snapshot::Social(self.social.snapshot()));
    }

    fn persist_form_analysis(&self) {
        self.writer
            .enqueue(Snapshot::FormAnalysis(self.form_analysis.snapshot()));
    }
}

async fn load_slot<S>(repository: &dyn StateRepository<S>) -> Option<S>
where
    S: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    match repository.load().await {
        Ok(Some(snapshot)) => {
            debug!(slot = repository.slot(), "Restored snapshot");
            Some(snapshot)
        }
        Ok(None) => None,
        Err(e) => {
            warn!(slot = repository.slot(), error = %e, "Discarding unreadable snapshot");
            None
        }
    }
}

fn check_measurements(weight: Option<f64>, distance: Option<f64>) -> AppResult<()> {
    if let Some(weight) = weight {
        validate_set_weight(weight).map_err(AppError::Validation)?;
    }
    if let Some(distance) = distance {
        validate_set_distance(distance).map_err(AppError::Validation)?;
    }
    Ok(())
}
