//! Psychological aspect categories that questions are tagged with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five fixed categories a question measures.
///
/// Declaration order is the reporting order: per-aspect recommendations
/// are appended in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    RiskManagement,
    EmotionalControl,
    Discipline,
    Preparation,
    Mindset,
}

impl Aspect {
    /// All aspects in reporting order.
    pub const ALL: [Aspect; 5] = [
        Aspect::RiskManagement,
        Aspect::EmotionalControl,
        Aspect::Discipline,
        Aspect::Preparation,
        Aspect::Mindset,
    ];

    /// Returns the display label for this aspect.
    pub fn label(&self) -> &'static str {
        match self {
            Aspect::RiskManagement => "Risk Management",
            Aspect::EmotionalControl => "Emotional Control",
            Aspect::Discipline => "Discipline & Patience",
            Aspect::Preparation => "Preparation & Analysis",
            Aspect::Mindset => "Trading Mindset",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_aspect_once_in_order() {
        let mut sorted = Aspect::ALL;
        sorted.sort();
        assert_eq!(sorted, Aspect::ALL);
    }

    #[test]
    fn labels_match_catalog_names() {
        assert_eq!(Aspect::Discipline.label(), "Discipline & Patience");
        assert_eq!(Aspect::Mindset.to_string(), "Trading Mindset");
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&Aspect::EmotionalControl).unwrap();
        assert_eq!(json, r#""emotional_control""#);
    }
}
