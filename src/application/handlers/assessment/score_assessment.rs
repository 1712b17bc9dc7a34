//! ScoreAssessmentHandler - Scores a completed assessment and optionally
//! saves the result.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::assessment::{AssessmentType, Question};
use crate::domain::scoring::{ScoreResult, ScoringEngine, ScoringError};
use crate::ports::{Clock, ResultRepository, StoredScoreResult};

/// Command to score an answer set.
#[derive(Debug, Clone)]
pub struct ScoreAssessmentCommand {
    pub assessment_type: AssessmentType,
    pub questions: Vec<Question>,
    pub answers: Vec<Option<usize>>,
    /// Persist the result to history after scoring.
    pub save: bool,
}

/// Result of scoring.
///
/// `saved` is `None` when saving was not requested or the store failed.
#[derive(Debug, Clone)]
pub struct ScoreAssessmentResult {
    pub result: ScoreResult,
    pub saved: Option<StoredScoreResult>,
}

/// Handler for scoring assessments.
pub struct ScoreAssessmentHandler {
    repository: Arc<dyn ResultRepository>,
    clock: Arc<dyn Clock>,
}

impl ScoreAssessmentHandler {
    pub fn new(repository: Arc<dyn ResultRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        cmd: ScoreAssessmentCommand,
    ) -> Result<ScoreAssessmentResult, ScoringError> {
        // 1. Score (pure)
        let result = ScoringEngine::score(&cmd.questions, &cmd.answers, self.clock.now())?;

        info!(
            assessment_type = %cmd.assessment_type,
            overall_score = result.overall_score.value(),
            category = result.category.label(),
            "Assessment scored"
        );

        if !cmd.save {
            return Ok(ScoreAssessmentResult {
                result,
                saved: None,
            });
        }

        // 2. Persist; a store failure degrades to an unsaved result
        let saved = match self
            .repository
            .save_score_result(cmd.assessment_type, &result)
            .await
        {
            Ok(stored) => {
                info!(record_id = %stored.id, "Score result saved");
                Some(stored)
            }
            Err(error) => {
                warn!(error = %error, code = %error.code(), "Failed to save score result");
                None
            }
        };

        Ok(ScoreAssessmentResult { result, saved })
    }
}
