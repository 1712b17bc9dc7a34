//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Assessment handlers are request/response; the live monitor is a
//! long-running service with its own ticker task.

pub mod handlers;

pub use handlers::{
    // Assessment handlers
    AssessmentRunner, ResultHistoryHandler, ScoreAssessmentCommand, ScoreAssessmentHandler,
    ScoreAssessmentResult, StartAssessmentCommand, StartAssessmentHandler,
    // Monitoring
    LiveMonitor, LiveMonitorConfig, RngSource, DEFAULT_TICK_INTERVAL,
};
