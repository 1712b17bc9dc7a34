//! Threshold alerts.
//!
//! Alerts are evaluated against each new snapshot in isolation. A metric
//! that stays past its threshold raises the same alert on every tick.

use serde::{Deserialize, Serialize};

use super::{Metric, PsychologySnapshot, METRIC_MAX, METRIC_MIN};
use crate::domain::foundation::{Timestamp, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    High,
    Medium,
}

/// A threshold crossing observed on one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub alert_type: AlertType,
    pub message: String,
    pub level: AlertLevel,
    pub metric: Metric,
    pub value: f64,
    pub timestamp: Timestamp,
}

/// Alert trigger points. Comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Stress above this raises a high-level warning.
    pub stress_high: f64,
    /// Confidence below this raises a high-level warning.
    pub confidence_low: f64,
    /// Focus below this raises a medium-level notice.
    pub focus_low: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            stress_high: 80.0,
            confidence_low: 20.0,
            focus_low: 40.0,
        }
    }
}

impl AlertThresholds {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("stress_high", self.stress_high),
            ("confidence_low", self.confidence_low),
            ("focus_low", self.focus_low),
        ] {
            if !(METRIC_MIN..=METRIC_MAX).contains(&value) {
                return Err(ValidationError::out_of_range(field, 0, 100, value as i32));
            }
        }
        Ok(())
    }

    /// Returns every alert the snapshot triggers, in stress, confidence,
    /// focus order.
    pub fn evaluate(&self, snapshot: &PsychologySnapshot) -> Vec<Alert> {
        let metrics = &snapshot.metrics;
        let mut alerts = Vec::new();

        if metrics.stress_level > self.stress_high {
            alerts.push(Alert {
                alert_type: AlertType::Warning,
                message: "High stress level detected. Consider taking a break.".to_string(),
                level: AlertLevel::High,
                metric: Metric::StressLevel,
                value: metrics.stress_level,
                timestamp: snapshot.timestamp,
            });
        }

        if metrics.confidence < self.confidence_low {
            alerts.push(Alert {
                alert_type: AlertType::Warning,
                message: "Low confidence detected. Review your trading plan.".to_string(),
                level: AlertLevel::High,
                metric: Metric::Confidence,
                value: metrics.confidence,
                timestamp: snapshot.timestamp,
            });
        }

        if metrics.focus_level < self.focus_low {
            alerts.push(Alert {
                alert_type: AlertType::Info,
                message: "Focus level is decreasing. Minimize distractions.".to_string(),
                level: AlertLevel::Medium,
                metric: Metric::FocusLevel,
                value: metrics.focus_level,
                timestamp: snapshot.timestamp,
            });
        }

        alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::{EmotionalState, PsychologyMetrics};

    fn snapshot(confidence: f64, stress: f64, focus: f64) -> PsychologySnapshot {
        PsychologySnapshot {
            metrics: PsychologyMetrics::new(confidence, stress, focus, 50.0),
            emotional_state: EmotionalState::Neutral,
            timestamp: Timestamp::now(),
        }
    }

    #[test]
    fn baseline_raises_nothing() {
        let alerts = AlertThresholds::default().evaluate(&snapshot(50.0, 30.0, 70.0));
        assert!(alerts.is_empty());
    }

    #[test]
    fn all_three_fire_in_order() {
        let alerts = AlertThresholds::default().evaluate(&snapshot(10.0, 90.0, 20.0));

        let metrics: Vec<Metric> = alerts.iter().map(|a| a.metric).collect();
        assert_eq!(
            metrics,
            vec![Metric::StressLevel, Metric::Confidence, Metric::FocusLevel]
        );
        assert_eq!(alerts[0].level, AlertLevel::High);
        assert_eq!(alerts[1].alert_type, AlertType::Warning);
        assert_eq!(alerts[2].level, AlertLevel::Medium);
        assert_eq!(alerts[2].alert_type, AlertType::Info);
        assert_eq!(alerts[0].value, 90.0);
    }

    #[test]
    fn thresholds_are_strict() {
        let alerts = AlertThresholds::default().evaluate(&snapshot(20.0, 80.0, 40.0));
        assert!(alerts.is_empty());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let thresholds = AlertThresholds {
            stress_high: 101.0,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
        assert!(AlertThresholds::default().validate().is_ok());
    }
}
