//! Fitness Tracker
//!
//! Boots the client state layer against local storage and runs the session
//! the app performs on first launch: sign in as the demo user and load the
//! feed, history and stats screens.

use anyhow::Result;
use fitness_tracker_app::{config::AppConfig, state::AppState, telemetry};
use fitness_tracker_shared::{seed, LoginRequest};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    telemetry::init_tracing();

    let config = AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting Fitness Tracker"
    );

    let mut state = AppState::bootstrap(config).await?;

    // the feed screen signs in as the first demo user when nobody is logged in
    if state.current_user().is_none() {
        if let Some(demo) = seed::users().into_iter().next() {
            state.login(&LoginRequest::new(demo.email, "demo"))?;
        }
    }

    if let Some(user) = state.current_user() {
        info!(
            username = %user.username,
            level = user.level,
            rank = %user.rank,
            "Signed in"
        );
    }

    let stats = state.user_stats();
    info!(
        workouts = stats.total_workouts,
        sets = stats.total_sets,
        total_weight = stats.total_weight,
        streak_days = stats.streak_days,
        level = stats.level,
        "Workout stats"
    );
    info!(
        posts = state.social().posts().len(),
        analyses = state.form_analysis().results().len(),
        exercises = seed::exercise_catalog().len(),
        "State loaded"
    );

    state.shutdown().await?;
    info!("Shutdown complete");
    Ok(())
}
