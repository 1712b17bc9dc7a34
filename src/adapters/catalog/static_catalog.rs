//! Built-in question bank.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::assessment::{AnswerOption, Aspect, AssessmentType, Question};
use crate::ports::QuestionCatalog;

fn question(id: u32, text: &str, aspect: Aspect, options: &[(&str, u8)]) -> Question {
    Question {
        id,
        text: text.to_string(),
        aspect,
        options: options
            .iter()
            .map(|(text, value)| AnswerOption {
                text: text.to_string(),
                value: *value,
            })
            .collect(),
    }
}

static QUESTION_BANK: Lazy<HashMap<AssessmentType, Vec<Question>>> = Lazy::new(|| {
    let mut bank = HashMap::new();

    bank.insert(
        AssessmentType::Full,
        vec![
            question(
                1,
                "When a trade goes against you, what is your typical reaction?",
                Aspect::EmotionalControl,
                &[
                    ("I immediately close the position to limit losses", 1),
                    ("I review my analysis and adjust my stop loss if needed", 3),
                    ("I add to my position to average down", 2),
                    ("I stick to my original plan without emotional reaction", 4),
                ],
            ),
            question(
                2,
                "How do you feel after experiencing a significant trading loss?",
                Aspect::Mindset,
                &[
                    ("Devastated and hesitant to trade again", 1),
                    ("Frustrated but determined to recover", 2),
                    ("I analyze what went wrong and learn from it", 4),
                    ("It's part of trading; I move on to the next opportunity", 3),
                ],
            ),
            question(
                3,
                "When you see a trading opportunity but it doesn't meet all your criteria, what do you do?",
                Aspect::Discipline,
                &[
                    ("I take the trade anyway; FOMO is strong", 1),
                    ("I take a smaller position than usual", 2),
                    ("I wait for a better setup that meets all my criteria", 4),
                    ("I might take it if I'm feeling confident", 3),
                ],
            ),
            question(
                4,
                "How do you handle a series of winning trades?",
                Aspect::EmotionalControl,
                &[
                    ("I increase my position sizes significantly", 1),
                    ("I become more cautious, expecting a loss soon", 2),
                    ("I stick to my trading plan and risk management", 4),
                    ("I look for more opportunities to capitalize on my streak", 3),
                ],
            ),
            question(
                5,
                "When do you typically exit a profitable trade?",
                Aspect::RiskManagement,
                &[
                    ("As soon as it shows a small profit", 1),
                    ("When I hit my predetermined profit target", 4),
                    ("When the market shows signs of reversal", 3),
                    ("I let it run as long as possible", 2),
                ],
            ),
        ],
    );

    bank.insert(
        AssessmentType::Quick,
        vec![question(
            1,
            "When a trade goes against you, what is your typical reaction?",
            Aspect::EmotionalControl,
            &[
                ("I immediately close the position", 1),
                ("I stick to my original plan", 4),
                ("I add to my position", 2),
            ],
        )],
    );

    bank.insert(
        AssessmentType::Risk,
        vec![question(
            1,
            "What percentage of your trading capital are you willing to risk on a single trade?",
            Aspect::RiskManagement,
            &[
                ("More than 5%", 1),
                ("3-5%", 2),
                ("1-2%", 4),
                ("Less than 1%", 3),
            ],
        )],
    );

    bank
});

/// Serves the built-in question bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticQuestionCatalog;

impl StaticQuestionCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Number of questions in the bank for `assessment_type`.
    pub fn question_count(&self, assessment_type: AssessmentType) -> usize {
        QUESTION_BANK
            .get(&assessment_type)
            .map(Vec::len)
            .unwrap_or_default()
    }
}

impl QuestionCatalog for StaticQuestionCatalog {
    fn questions(&self, assessment_type: AssessmentType) -> Vec<Question> {
        QUESTION_BANK
            .get(&assessment_type)
            .or_else(|| QUESTION_BANK.get(&AssessmentType::default()))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{MAX_OPTION_VALUE, MIN_OPTION_VALUE};

    #[test]
    fn bank_sizes() {
        let catalog = StaticQuestionCatalog::new();
        assert_eq!(catalog.question_count(AssessmentType::Full), 5);
        assert_eq!(catalog.question_count(AssessmentType::Quick), 1);
        assert_eq!(catalog.question_count(AssessmentType::Risk), 1);
    }

    #[test]
    fn every_option_value_is_in_range_and_max_is_reachable() {
        let catalog = StaticQuestionCatalog::new();
        for assessment_type in [AssessmentType::Full, AssessmentType::Quick, AssessmentType::Risk] {
            for q in catalog.questions(assessment_type) {
                assert!(q
                    .options
                    .iter()
                    .all(|o| (MIN_OPTION_VALUE..=MAX_OPTION_VALUE).contains(&o.value)));
                assert!(q.options.iter().any(|o| o.value == MAX_OPTION_VALUE));
            }
        }
    }

    #[test]
    fn unknown_name_falls_back_to_quick() {
        let catalog = StaticQuestionCatalog::new();
        let (assessment_type, questions) = catalog.questions_by_name("psychic");
        assert_eq!(assessment_type, AssessmentType::Quick);
        assert_eq!(questions, catalog.questions(AssessmentType::Quick));
    }

    #[test]
    fn full_bank_aspects_in_order() {
        let aspects: Vec<Aspect> = StaticQuestionCatalog::new()
            .questions(AssessmentType::Full)
            .iter()
            .map(|q| q.aspect)
            .collect();
        assert_eq!(
            aspects,
            vec![
                Aspect::EmotionalControl,
                Aspect::Mindset,
                Aspect::Discipline,
                Aspect::EmotionalControl,
                Aspect::RiskManagement,
            ]
        );
    }
}
