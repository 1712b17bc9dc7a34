//! Session summary statistics.

use serde::{Deserialize, Serialize};

use crate::domain::telemetry::{Metric, PsychologySnapshot};

/// Statistics over every snapshot of a session.
///
/// A session without snapshots summarizes to all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub average_confidence: f64,
    pub average_stress: f64,
    pub average_focus: f64,
    /// Mean absolute tick-to-tick change of confidence.
    pub volatility: f64,
    pub peak_stress: f64,
    pub lowest_confidence: f64,
}

impl SessionSummary {
    pub fn from_snapshots(snapshots: &[PsychologySnapshot]) -> Self {
        if snapshots.is_empty() {
            return Self::default();
        }

        let confidence = series(snapshots, Metric::Confidence);
        let stress = series(snapshots, Metric::StressLevel);
        let focus = series(snapshots, Metric::FocusLevel);

        Self {
            average_confidence: mean(&confidence),
            average_stress: mean(&stress),
            average_focus: mean(&focus),
            volatility: volatility(&confidence),
            peak_stress: stress.iter().copied().fold(f64::MIN, f64::max),
            lowest_confidence: confidence.iter().copied().fold(f64::MAX, f64::min),
        }
    }
}

fn series(snapshots: &[PsychologySnapshot], metric: Metric) -> Vec<f64> {
    snapshots.iter().map(|s| s.metrics.get(metric)).collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of absolute consecutive differences; 0 with fewer than two values.
pub fn volatility(values: &[f64]) -> f64 {
    let changes: Vec<f64> = values.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    mean(&changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::telemetry::{EmotionalState, PsychologyMetrics};

    fn snapshot(confidence: f64, stress: f64, focus: f64) -> PsychologySnapshot {
        PsychologySnapshot {
            metrics: PsychologyMetrics::new(confidence, stress, focus, 60.0),
            emotional_state: EmotionalState::Neutral,
            timestamp: Timestamp::now(),
        }
    }

    #[test]
    fn volatility_uses_confidence_only() {
        let snapshots = vec![
            snapshot(50.0, 30.0, 70.0),
            snapshot(60.0, 90.0, 10.0),
            snapshot(55.0, 10.0, 90.0),
        ];

        let summary = SessionSummary::from_snapshots(&snapshots);

        assert_eq!(summary.volatility, 7.5);
    }

    #[test]
    fn averages_and_extremes() {
        let snapshots = vec![
            snapshot(50.0, 30.0, 70.0),
            snapshot(40.0, 60.0, 80.0),
            snapshot(30.0, 45.0, 60.0),
        ];

        let summary = SessionSummary::from_snapshots(&snapshots);

        assert_eq!(summary.average_confidence, 40.0);
        assert_eq!(summary.average_stress, 45.0);
        assert_eq!(summary.average_focus, 70.0);
        assert_eq!(summary.peak_stress, 60.0);
        assert_eq!(summary.lowest_confidence, 30.0);
    }

    #[test]
    fn single_snapshot_has_zero_volatility() {
        let summary = SessionSummary::from_snapshots(&[snapshot(50.0, 30.0, 70.0)]);
        assert_eq!(summary.volatility, 0.0);
        assert_eq!(summary.average_confidence, 50.0);
    }

    #[test]
    fn empty_session_summarizes_to_zero() {
        assert_eq!(SessionSummary::from_snapshots(&[]), SessionSummary::default());
    }
}
