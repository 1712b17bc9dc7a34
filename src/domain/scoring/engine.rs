//! Rubric scoring engine.
//!
//! Converts a question list and its answers into an overall percentage,
//! per-aspect percentages and a recommendation list.
//!
//! # Rubric
//!
//! Every answered question contributes its option value (1-4) to the
//! numerator and the maximum value 4 to the denominator. Unanswered
//! questions contribute to neither. The score is
//! `round(numerator / denominator * 100)`, and `0` when nothing was
//! answered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::{aspect_recommendations, bracket_recommendations};
use super::{ScoreCategory, ScoringError};
use crate::domain::assessment::{Aspect, Question, MAX_OPTION_VALUE};
use crate::domain::foundation::{Percentage, Timestamp};

/// Aspects scoring below this receive their targeted bundle.
pub const WEAK_ASPECT_THRESHOLD: u8 = 60;

/// Per-aspect scores, always containing all five aspects.
pub type AspectScores = BTreeMap<Aspect, Percentage>;

/// The outcome of scoring one completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: Percentage,
    pub aspect_scores: AspectScores,
    pub recommendations: Vec<String>,
    pub category: ScoreCategory,
    pub timestamp: Timestamp,
}

/// Running numerator/denominator pair.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    earned: u32,
    possible: u32,
}

impl Tally {
    fn add(&mut self, value: u8) {
        self.earned += u32::from(value);
        self.possible += u32::from(MAX_OPTION_VALUE);
    }

    fn percentage(&self) -> Percentage {
        Percentage::from_ratio(self.earned, self.possible)
    }
}

/// Stateless scoring service.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Overall rubric score across every answered question.
    ///
    /// Answers whose index does not name an option are treated as
    /// unanswered; use [`ScoringEngine::score`] to reject them instead.
    pub fn overall_score(questions: &[Question], answers: &[Option<usize>]) -> Percentage {
        let mut tally = Tally::default();
        for (_, value) in answered_values(questions, answers) {
            tally.add(value);
        }
        tally.percentage()
    }

    /// Rubric score per aspect. Aspects with no answered question score 0.
    pub fn aspect_scores(questions: &[Question], answers: &[Option<usize>]) -> AspectScores {
        let mut tallies: BTreeMap<Aspect, Tally> =
            Aspect::ALL.iter().map(|a| (*a, Tally::default())).collect();

        for (question, value) in answered_values(questions, answers) {
            if let Some(tally) = tallies.get_mut(&question.aspect) {
                tally.add(value);
            }
        }

        tallies
            .into_iter()
            .map(|(aspect, tally)| (aspect, tally.percentage()))
            .collect()
    }

    /// Bracket bundle for the overall score, then the bundle of every weak
    /// aspect in aspect order, with exact duplicates removed.
    pub fn generate_recommendations(
        overall_score: Percentage,
        aspect_scores: &AspectScores,
    ) -> Vec<String> {
        let weak_aspects = aspect_scores
            .iter()
            .filter(|(_, score)| score.value() < WEAK_ASPECT_THRESHOLD)
            .flat_map(|(aspect, _)| aspect_recommendations(*aspect).iter());

        let mut recommendations: Vec<String> = Vec::new();
        for text in bracket_recommendations(ScoreCategory::from_score(overall_score))
            .iter()
            .chain(weak_aspects)
        {
            if !recommendations.iter().any(|r| r == text) {
                recommendations.push((*text).to_string());
            }
        }
        recommendations
    }

    /// Validates the answer set and produces a full `ScoreResult`.
    ///
    /// # Errors
    ///
    /// - `AnswerCountMismatch` if the lists differ in length
    /// - `InvalidAnswer` if any answer names a non-existent option
    pub fn score(
        questions: &[Question],
        answers: &[Option<usize>],
        scored_at: Timestamp,
    ) -> Result<ScoreResult, ScoringError> {
        if questions.len() != answers.len() {
            return Err(ScoringError::AnswerCountMismatch {
                questions: questions.len(),
                answers: answers.len(),
            });
        }
        for (question_index, (question, answer)) in questions.iter().zip(answers).enumerate() {
            if let Some(option_index) = *answer {
                if option_index >= question.option_count() {
                    return Err(ScoringError::InvalidAnswer {
                        question_index,
                        option_index,
                        option_count: question.option_count(),
                    });
                }
            }
        }

        let overall_score = Self::overall_score(questions, answers);
        let aspect_scores = Self::aspect_scores(questions, answers);
        let recommendations = Self::generate_recommendations(overall_score, &aspect_scores);

        Ok(ScoreResult {
            overall_score,
            aspect_scores,
            recommendations,
            category: ScoreCategory::from_score(overall_score),
            timestamp: scored_at,
        })
    }
}

fn answered_values<'a>(
    questions: &'a [Question],
    answers: &'a [Option<usize>],
) -> impl Iterator<Item = (&'a Question, u8)> + 'a {
    questions
        .iter()
        .zip(answers)
        .filter_map(|(question, answer)| {
            let index = (*answer)?;
            question.option_value(index).ok().map(|value| (question, value))
        })
}
