//! Snapshots and emotional-state derivation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PsychologyMetrics;
use crate::domain::foundation::Timestamp;

/// Discrete label derived from a metric sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    Confident,
    Stressed,
    Anxious,
    Focused,
    #[default]
    Neutral,
}

impl EmotionalState {
    /// First matching rule wins:
    ///
    /// 1. confidence > 70 and stress < 30 => `Confident`
    /// 2. stress > 70 => `Stressed`
    /// 3. confidence < 30 => `Anxious`
    /// 4. focus > 80 => `Focused`
    /// 5. otherwise `Neutral`
    pub fn classify(metrics: &PsychologyMetrics) -> Self {
        if metrics.confidence > 70.0 && metrics.stress_level < 30.0 {
            EmotionalState::Confident
        } else if metrics.stress_level > 70.0 {
            EmotionalState::Stressed
        } else if metrics.confidence < 30.0 {
            EmotionalState::Anxious
        } else if metrics.focus_level > 80.0 {
            EmotionalState::Focused
        } else {
            EmotionalState::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionalState::Confident => "confident",
            EmotionalState::Stressed => "stressed",
            EmotionalState::Anxious => "anxious",
            EmotionalState::Focused => "focused",
            EmotionalState::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timestamped sample of the four metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PsychologySnapshot {
    #[serde(flatten)]
    pub metrics: PsychologyMetrics,
    pub emotional_state: EmotionalState,
    pub timestamp: Timestamp,
}

impl PsychologySnapshot {
    /// The seed sample of a new session.
    pub fn baseline(at: Timestamp) -> Self {
        Self {
            metrics: PsychologyMetrics::BASELINE,
            emotional_state: EmotionalState::Neutral,
            timestamp: at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(confidence: f64, stress: f64, focus: f64) -> PsychologyMetrics {
        PsychologyMetrics::new(confidence, stress, focus, 50.0)
    }

    #[test]
    fn confident_takes_priority() {
        assert_eq!(
            EmotionalState::classify(&metrics(75.0, 20.0, 90.0)),
            EmotionalState::Confident
        );
        assert_eq!(
            EmotionalState::classify(&metrics(71.0, 29.0, 50.0)),
            EmotionalState::Confident
        );
    }

    #[test]
    fn confident_boundary_falls_through() {
        // stress 31 fails the confident rule; no later rule matches
        assert_eq!(
            EmotionalState::classify(&metrics(71.0, 31.0, 50.0)),
            EmotionalState::Neutral
        );
        // same, but high focus reaches the focused rule
        assert_eq!(
            EmotionalState::classify(&metrics(71.0, 31.0, 85.0)),
            EmotionalState::Focused
        );
        // exactly 70 confidence is not above 70
        assert_eq!(
            EmotionalState::classify(&metrics(70.0, 10.0, 50.0)),
            EmotionalState::Neutral
        );
    }

    #[test]
    fn stressed_beats_anxious() {
        assert_eq!(
            EmotionalState::classify(&metrics(10.0, 75.0, 50.0)),
            EmotionalState::Stressed
        );
        assert_eq!(
            EmotionalState::classify(&metrics(10.0, 70.0, 50.0)),
            EmotionalState::Anxious
        );
    }

    #[test]
    fn baseline_classifies_neutral() {
        assert_eq!(
            EmotionalState::classify(&PsychologyMetrics::BASELINE),
            EmotionalState::Neutral
        );
    }

    #[test]
    fn snapshot_serializes_flat() {
        let snapshot = PsychologySnapshot::baseline(Timestamp::from_unix_secs(0));
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json["stress_level"], 30.0);
        assert_eq!(json["emotional_state"], "neutral");
    }
}
