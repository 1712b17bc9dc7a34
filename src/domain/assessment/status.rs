//! Assessment lifecycle status.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle of one questionnaire run.
///
/// `start()` may be called again from any state to reset the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl AssessmentStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, AssessmentStatus::InProgress)
    }
}

impl StateMachine for AssessmentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStatus::*;
        matches!(
            (self, target),
            (NotStarted, InProgress)
                | (InProgress, InProgress)
                | (InProgress, Completed)
                | (Completed, InProgress)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStatus::*;
        match self {
            NotStarted => vec![InProgress],
            InProgress => vec![InProgress, Completed],
            Completed => vec![InProgress],
        }
    }
}
