//! Client-side state containers
//!
//! Each store owns its in-memory collections and exposes synchronous
//! mutations. Stores never touch storage: the controller snapshots them
//! after every mutating command.

pub mod auth;
pub mod form_analysis;
pub mod social;
pub mod workout;

pub use auth::{AuthSnapshot, AuthStore};
pub use form_analysis::{FormAnalysisSnapshot, FormAnalysisStore};
pub use social::{SocialSnapshot, SocialStore};
pub use workout::{WorkoutSnapshot, WorkoutStore};
