//! Scoring domain - pure rubric scoring of completed assessments.

mod catalog;
mod category;
mod engine;
mod errors;

pub use category::ScoreCategory;
pub use engine::{AspectScores, ScoreResult, ScoringEngine, WEAK_ASPECT_THRESHOLD};
pub use errors::ScoringError;
