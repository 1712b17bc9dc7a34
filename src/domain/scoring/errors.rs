//! Scoring error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised when a question/answer set cannot be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Answer count {answers} does not match question count {questions}")]
    AnswerCountMismatch { questions: usize, answers: usize },

    #[error("Invalid answer index {option_index} for question {question_index} ({option_count} options)")]
    InvalidAnswer {
        question_index: usize,
        option_index: usize,
        option_count: usize,
    },
}

impl ScoringError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScoringError::AnswerCountMismatch { .. } => ErrorCode::ValidationFailed,
            ScoringError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
        }
    }
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
