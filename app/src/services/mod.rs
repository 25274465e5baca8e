//! Business logic services
//!
//! Pure computations the stores delegate to: statistics derived from
//! workout history and the pluggable form-analysis strategy.

pub mod analysis;
pub mod stats;

pub use analysis::{AnalysisStrategy, Assessment, RandomAnalysis};
pub use stats::compute_stats;
