//! StartAssessmentHandler - Opens a questionnaire and drives it to completion.

use std::sync::Arc;

use tracing::{debug, info};

use super::ScoreAssessmentCommand;
use crate::application::handlers::notify::publish_or_log;
use crate::domain::assessment::{
    AssessmentError, AssessmentEvent, AssessmentProgress, AssessmentSession, AssessmentType,
    Question,
};
use crate::ports::{Clock, EventPublisher, QuestionCatalog};

/// Command to begin an assessment.
///
/// Unknown type names fall back to the default assessment type.
#[derive(Debug, Clone)]
pub struct StartAssessmentCommand {
    pub assessment_type: String,
}

impl StartAssessmentCommand {
    pub fn new(assessment_type: impl Into<String>) -> Self {
        Self {
            assessment_type: assessment_type.into(),
        }
    }
}

/// Handler that resolves questions and hands back a running assessment.
pub struct StartAssessmentHandler {
    catalog: Arc<dyn QuestionCatalog>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
}

impl StartAssessmentHandler {
    pub fn new(
        catalog: Arc<dyn QuestionCatalog>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            event_publisher,
            clock,
        }
    }

    pub fn handle(&self, cmd: StartAssessmentCommand) -> Result<AssessmentRunner, AssessmentError> {
        let (assessment_type, questions) = self.catalog.questions_by_name(&cmd.assessment_type);
        let mut session = AssessmentSession::new(assessment_type, questions)?;
        session.start();

        info!(
            assessment_id = %session.id(),
            assessment_type = %assessment_type.as_str(),
            questions = session.questions().len(),
            "Assessment started"
        );

        Ok(AssessmentRunner {
            session,
            event_publisher: Arc::clone(&self.event_publisher),
            clock: Arc::clone(&self.clock),
        })
    }
}

/// A live assessment whose progress and completion are published as they
/// happen.
pub struct AssessmentRunner {
    session: AssessmentSession,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
}

impl AssessmentRunner {
    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn assessment_type(&self) -> AssessmentType {
        self.session.assessment_type()
    }

    pub fn current_question(&self) -> &Question {
        self.session.current_question()
    }

    pub fn progress(&self) -> AssessmentProgress {
        self.session.progress()
    }

    pub fn can_proceed(&self) -> bool {
        self.session.can_proceed()
    }

    pub fn is_completed(&self) -> bool {
        self.session.is_completed()
    }

    /// Records an answer for the current question.
    pub async fn answer(&mut self, option_index: usize) -> Result<(), AssessmentError> {
        self.session.answer(option_index, self.clock.now())?;
        self.flush_events().await;
        Ok(())
    }

    /// Advances; returns `false` once the final question is passed and the
    /// assessment completes.
    pub async fn next(&mut self) -> Result<bool, AssessmentError> {
        let advanced = self.session.next(self.clock.now())?;
        if !advanced {
            info!(assessment_id = %self.session.id(), "Assessment completed");
        }
        self.flush_events().await;
        Ok(advanced)
    }

    pub fn previous(&mut self) -> Result<bool, AssessmentError> {
        self.session.previous()
    }

    /// The scoring command for a completed assessment, `None` before then.
    pub fn score_command(&self, save: bool) -> Option<ScoreAssessmentCommand> {
        if !self.session.is_completed() {
            return None;
        }
        Some(ScoreAssessmentCommand {
            assessment_type: self.session.assessment_type(),
            questions: self.session.questions().to_vec(),
            answers: self.session.answers().to_vec(),
            save,
        })
    }

    async fn flush_events(&mut self) {
        for event in self.session.take_events() {
            if let AssessmentEvent::Progressed(progressed) = &event {
                debug!(
                    assessment_id = %progressed.assessment_id,
                    question_index = progressed.question_index,
                    "Answer recorded"
                );
            }
            publish_or_log(self.event_publisher.as_ref(), event.to_envelope()).await;
        }
    }
}
