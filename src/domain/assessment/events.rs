//! Assessment domain events.
//!
//! - `AssessmentProgressed` - an answer was recorded (progress channel)
//! - `AssessmentCompleted` - the last question was passed (completion channel)

use serde::{Deserialize, Serialize};

use super::{AssessmentType, Question};
use crate::domain::foundation::{
    domain_event, AssessmentId, DomainError, EventEnvelope, EventId, SerializableDomainEvent,
    Timestamp,
};

/// Published whenever an answer is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentProgressed {
    pub event_id: EventId,
    pub assessment_id: AssessmentId,
    pub assessment_type: AssessmentType,
    /// Index of the question that was just answered.
    pub question_index: usize,
    /// Snapshot of every answer slot after recording.
    pub answers: Vec<Option<usize>>,
    pub answered_at: Timestamp,
}

domain_event!(
    AssessmentProgressed,
    event_type = "assessment.progressed.v1",
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = answered_at,
    event_id = event_id
);

/// Published when the walker leaves the final question.
///
/// Carries everything the scoring engine needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentCompleted {
    pub event_id: EventId,
    pub assessment_id: AssessmentId,
    pub assessment_type: AssessmentType,
    pub questions: Vec<Question>,
    pub answers: Vec<Option<usize>>,
    pub completed_at: Timestamp,
}

domain_event!(
    AssessmentCompleted,
    event_type = "assessment.completed.v1",
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = completed_at,
    event_id = event_id
);

/// Events recorded by an `AssessmentSession`, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentEvent {
    Progressed(AssessmentProgressed),
    Completed(AssessmentCompleted),
}

impl AssessmentEvent {
    pub fn to_envelope(&self) -> Result<EventEnvelope, DomainError> {
        match self {
            AssessmentEvent::Progressed(e) => e.to_envelope(),
            AssessmentEvent::Completed(e) => e.to_envelope(),
        }
    }
}
