//! Assessment-specific error types.

use thiserror::Error;

use super::AssessmentStatus;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors raised by the questionnaire walker.
///
/// Every variant is returned before any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// Selected option index is outside the current question's options.
    #[error("Invalid answer index {option_index} for question {question_index} ({option_count} options)")]
    InvalidAnswer {
        question_index: usize,
        option_index: usize,
        option_count: usize,
    },

    /// Operation requires an assessment that is in progress.
    #[error("Assessment is not in progress (status: {status:?})")]
    NotInProgress { status: AssessmentStatus },

    /// Forward navigation attempted before the current question was answered.
    #[error("Question {question_index} must be answered before moving on")]
    Unanswered { question_index: usize },

    /// The catalog supplied no questions.
    #[error("Assessment has no questions")]
    EmptyQuestionSet,

    /// Lifecycle transition rejected by the state machine.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
            AssessmentError::NotInProgress { .. } => ErrorCode::InvalidStateTransition,
            AssessmentError::Unanswered { .. } => ErrorCode::ValidationFailed,
            AssessmentError::EmptyQuestionSet => ErrorCode::EmptyField,
            AssessmentError::Validation(_) => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_answer_message_names_indices() {
        let err = AssessmentError::InvalidAnswer {
            question_index: 2,
            option_index: 7,
            option_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid answer index 7 for question 2 (4 options)"
        );
        assert_eq!(err.code(), ErrorCode::InvalidAnswer);
    }

    #[test]
    fn not_in_progress_maps_to_state_code() {
        let err = AssessmentError::NotInProgress {
            status: AssessmentStatus::Completed,
        };
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::InvalidStateTransition);
    }
}
