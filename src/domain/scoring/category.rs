//! Score brackets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Bracket a score falls into.
///
/// Also selects the overall recommendation bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    /// 0-59
    Low,
    /// 60-79
    Medium,
    /// 80-100
    High,
}

impl ScoreCategory {
    pub fn from_score(score: Percentage) -> Self {
        match score.value() {
            0..=59 => ScoreCategory::Low,
            60..=79 => ScoreCategory::Medium,
            _ => ScoreCategory::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Low => "Needs Improvement",
            ScoreCategory::Medium => "Good",
            ScoreCategory::High => "Excellent",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_boundaries() {
        assert_eq!(ScoreCategory::from_score(Percentage::new(59)), ScoreCategory::Low);
        assert_eq!(ScoreCategory::from_score(Percentage::new(60)), ScoreCategory::Medium);
        assert_eq!(ScoreCategory::from_score(Percentage::new(79)), ScoreCategory::Medium);
        assert_eq!(ScoreCategory::from_score(Percentage::new(80)), ScoreCategory::High);
        assert_eq!(ScoreCategory::from_score(Percentage::HUNDRED), ScoreCategory::High);
        assert_eq!(ScoreCategory::from_score(Percentage::ZERO), ScoreCategory::Low);
    }

    #[test]
    fn labels() {
        assert_eq!(ScoreCategory::Low.to_string(), "Needs Improvement");
        assert_eq!(ScoreCategory::High.label(), "Excellent");
    }
}
