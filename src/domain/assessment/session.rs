//! Assessment session aggregate - walks an ordered question list.
//!
//! # Lifecycle
//!
//! ```text
//! NotStarted --start()--> InProgress(0) --next() on last--> Completed
//!                            ^   |                              |
//!                            +---+ answer/next/previous         |
//!                            +-----------start()----------------+
//! ```

use serde::{Deserialize, Serialize};

use super::{
    AssessmentCompleted, AssessmentError, AssessmentEvent, AssessmentProgressed,
    AssessmentStatus, AssessmentType, Question,
};
use crate::domain::foundation::{AssessmentId, EventId, Percentage, StateMachine, Timestamp};

/// Position report for progress displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentProgress {
    /// 1-based index of the current question.
    pub current: usize,
    pub total: usize,
    pub answered: usize,
    pub percentage: Percentage,
}

/// One run through a questionnaire.
///
/// # Invariants
///
/// - `answers.len() == questions.len()`
/// - every `Some(i)` in `answers` is a valid option index for its question
/// - `current_index < questions.len()`
/// - the session only reaches `Completed` with every question answered
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: AssessmentId,
    assessment_type: AssessmentType,
    questions: Vec<Question>,
    answers: Vec<Option<usize>>,
    current_index: usize,
    status: AssessmentStatus,
    domain_events: Vec<AssessmentEvent>,
}

impl AssessmentSession {
    /// Creates a session over the given questions.
    ///
    /// # Errors
    ///
    /// - `EmptyQuestionSet` if `questions` is empty
    pub fn new(
        assessment_type: AssessmentType,
        questions: Vec<Question>,
    ) -> Result<Self, AssessmentError> {
        if questions.is_empty() {
            return Err(AssessmentError::EmptyQuestionSet);
        }
        let answers = vec![None; questions.len()];
        Ok(Self {
            id: AssessmentId::new(),
            assessment_type,
            questions,
            answers,
            current_index: 0,
            status: AssessmentStatus::NotStarted,
            domain_events: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn assessment_type(&self) -> AssessmentType {
        self.assessment_type
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == AssessmentStatus::Completed
    }

    /// Returns the question under the cursor.
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// True iff the current question has an answer.
    ///
    /// Forward navigation is gated on this; there is no skip.
    pub fn can_proceed(&self) -> bool {
        self.answers[self.current_index].is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn progress(&self) -> AssessmentProgress {
        let answered = self.answers.iter().filter(|a| a.is_some()).count();
        AssessmentProgress {
            current: self.current_index + 1,
            total: self.questions.len(),
            answered,
            percentage: Percentage::from_ratio(answered as u32, self.questions.len() as u32),
        }
    }

    /// Drains events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<AssessmentEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Resets the cursor and clears all answers.
    pub fn start(&mut self) {
        self.current_index = 0;
        self.answers.iter_mut().for_each(|a| *a = None);
        self.status = AssessmentStatus::InProgress;
    }

    /// Records `option_index` for the current question at time `at`.
    ///
    /// # Errors
    ///
    /// - `NotInProgress` unless the session is in progress
    /// - `InvalidAnswer` if the index is outside the question's options
    pub fn answer(
        &mut self,
        option_index: usize,
        at: Timestamp,
    ) -> Result<(), AssessmentError> {
        self.ensure_in_progress()?;

        let option_count = self.current_question().option_count();
        if option_index >= option_count {
            return Err(AssessmentError::InvalidAnswer {
                question_index: self.current_index,
                option_index,
                option_count,
            });
        }

        self.answers[self.current_index] = Some(option_index);
        self.domain_events
            .push(AssessmentEvent::Progressed(AssessmentProgressed {
                event_id: EventId::new(),
                assessment_id: self.id,
                assessment_type: self.assessment_type,
                question_index: self.current_index,
                answers: self.answers.clone(),
                answered_at: at,
            }));
        Ok(())
    }

    /// Moves forward; on the last question, completes the assessment instead.
    ///
    /// Returns `true` if the cursor advanced, `false` on completion.
    ///
    /// # Errors
    ///
    /// - `NotInProgress` unless the session is in progress
    /// - `Unanswered` if the current question has no answer yet
    pub fn next(&mut self, at: Timestamp) -> Result<bool, AssessmentError> {
        self.ensure_in_progress()?;
        if !self.can_proceed() {
            return Err(AssessmentError::Unanswered {
                question_index: self.current_index,
            });
        }

        if self.has_next() {
            self.current_index += 1;
            return Ok(true);
        }

        self.status = self.status.transition_to(AssessmentStatus::Completed)?;
        self.domain_events
            .push(AssessmentEvent::Completed(AssessmentCompleted {
                event_id: EventId::new(),
                assessment_id: self.id,
                assessment_type: self.assessment_type,
                questions: self.questions.clone(),
                answers: self.answers.clone(),
                completed_at: at,
            }));
        Ok(false)
    }

    /// Moves back one question; a no-op returning `false` on the first.
    ///
    /// # Errors
    ///
    /// - `NotInProgress` unless the session is in progress
    pub fn previous(&mut self) -> Result<bool, AssessmentError> {
        self.ensure_in_progress()?;
        if self.current_index == 0 {
            return Ok(false);
        }
        self.current_index -= 1;
        Ok(true)
    }

    fn ensure_in_progress(&self) -> Result<(), AssessmentError> {
        if self.status.is_in_progress() {
            Ok(())
        } else {
            Err(AssessmentError::NotInProgress {
                status: self.status,
            })
        }
    }
}
