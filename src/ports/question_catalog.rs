//! QuestionCatalog port - Source of the question bank.

use crate::domain::assessment::{AssessmentType, Question};

/// Supplies the ordered question list for each assessment type.
///
/// The bank is static content, so lookups are synchronous.
pub trait QuestionCatalog: Send + Sync {
    /// Ordered questions for `assessment_type`.
    fn questions(&self, assessment_type: AssessmentType) -> Vec<Question>;

    /// Resolves a type by name, falling back to the default type when the
    /// name is not recognized.
    fn questions_by_name(&self, name: &str) -> (AssessmentType, Vec<Question>) {
        let assessment_type = AssessmentType::parse_or_default(name);
        (assessment_type, self.questions(assessment_type))
    }
}
