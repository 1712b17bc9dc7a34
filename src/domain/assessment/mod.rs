//! Assessment domain module.
//!
//! A fixed-form questionnaire: questions tagged with psychological aspects,
//! and a session aggregate that walks them one at a time.
//!
//! # Events
//!
//! - `AssessmentProgressed` - Recorded when an answer is given
//! - `AssessmentCompleted` - Recorded when the last question is passed

mod aspect;
mod errors;
mod events;
mod question;
mod session;
mod status;

pub use aspect::Aspect;
pub use errors::AssessmentError;
pub use events::{AssessmentCompleted, AssessmentEvent, AssessmentProgressed};
pub use question::{AnswerOption, AssessmentType, Question, MAX_OPTION_VALUE, MIN_OPTION_VALUE};
pub use session::{AssessmentProgress, AssessmentSession};
pub use status::AssessmentStatus;
