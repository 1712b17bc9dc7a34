//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod monitoring;
mod notify;

pub use assessment::{
    AssessmentRunner, ResultHistoryHandler, ScoreAssessmentCommand, ScoreAssessmentHandler,
    ScoreAssessmentResult, StartAssessmentCommand, StartAssessmentHandler,
};
pub use monitoring::{LiveMonitor, LiveMonitorConfig, RngSource, DEFAULT_TICK_INTERVAL};
