//! Integration tests for the auth session

mod common;

use fitness_tracker_shared::{AppError, LoginRequest, ProfileUpdate};

#[tokio::test]
async fn test_unknown_email_stays_logged_out() {
    let mut app = common::TestApp::new().await;
    let err = app
        .state
        .login(&LoginRequest::new("ghost@example.com", "pw"))
        .unwrap_err();

    assert!(matches!(err, AppError::Unauthorized(_)));
    assert!(!app.state.auth().is_authenticated());
    assert!(app.state.current_user().is_none());
}

#[tokio::test]
async fn test_session_survives_restart() {
    let app = common::TestApp::logged_in().await;
    let app = app.restart().await;
    assert_eq!(app.state.current_user().unwrap().username, "fitness_pro");
}

#[tokio::test]
async fn test_logout_persists() {
    let mut app = common::TestApp::logged_in().await;
    app.state.logout();
    app.state.flush().await.unwrap();

    let json = app.read_slot("auth-storage");
    assert_eq!(json["isAuthenticated"], false);
    assert!(json["user"].is_null());

    let app = app.restart().await;
    assert!(app.state.current_user().is_none());
}

#[tokio::test]
async fn test_profile_edit_survives_restart() {
    let mut app = common::TestApp::logged_in().await;
    app.state
        .update_profile(ProfileUpdate {
            username: Some("deadlift_dan".to_string()),
            ..Default::default()
        })
        .unwrap();

    let app = app.restart().await;
    assert_eq!(app.state.current_user().unwrap().username, "deadlift_dan");
}

#[tokio::test]
async fn test_corrupt_auth_file_falls_back_to_logged_out() {
    let app = common::TestApp::logged_in().await;
    app.state.flush().await.unwrap();
    std::fs::write(app.dir.path().join("auth-storage.json"), "{ nope").unwrap();

    let app = app.restart().await;
    assert!(app.state.current_user().is_none());
    assert_eq!(app.state.social().posts().len(), 4);
}
