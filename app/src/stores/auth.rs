//! Auth session store
//!
//! Login is a demo stub: it matches the email against the seeded user table
//! and never checks the password.

use fitness_tracker_shared::{seed, LoginRequest, ProfileUpdate, User};
use serde::{Deserialize, Serialize};

/// Persisted auth state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

/// Current-user session
#[derive(Debug, Clone)]
pub struct AuthStore {
    user: Option<User>,
    directory: Vec<User>,
}

impl AuthStore {
    /// Logged out, with the seeded user table
    pub fn seeded() -> Self {
        Self::with_directory(seed::users())
    }

    pub fn with_directory(directory: Vec<User>) -> Self {
        Self {
            user: None,
            directory,
        }
    }

    pub fn from_snapshot(snapshot: AuthSnapshot) -> Self {
        let mut store = Self::seeded();
        if snapshot.is_authenticated {
            store.user = snapshot.user;
        }
        store
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Authenticate by exact email match
    ///
    /// Returns false and leaves the session untouched when no user matches.
    pub fn login(&mut self, request: &LoginRequest) -> bool {
        match self.directory.iter().find(|u| u.email == request.email) {
            Some(user) => {
                self.user = Some(user.clone());
                true
            }
            None => false,
        }
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    /// Merge profile fields into the current user; no-op when logged out
    pub fn update_profile(&mut self, update: ProfileUpdate) -> bool {
        match self.user.as_mut() {
            Some(user) => {
                update.apply_to(user);
                true
            }
            None => false,
        }
    }
}
