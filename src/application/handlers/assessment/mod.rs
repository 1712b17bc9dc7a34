//! Assessment command and query handlers.

mod result_history;
mod score_assessment;
mod start_assessment;

pub use result_history::ResultHistoryHandler;
pub use score_assessment::{ScoreAssessmentCommand, ScoreAssessmentHandler, ScoreAssessmentResult};
pub use start_assessment::{AssessmentRunner, StartAssessmentCommand, StartAssessmentHandler};
