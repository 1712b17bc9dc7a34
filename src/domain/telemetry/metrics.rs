//! Psychological metric values and drift bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Lower bound of every metric.
pub const METRIC_MIN: f64 = 0.0;

/// Upper bound of every metric.
pub const METRIC_MAX: f64 = 100.0;

/// Identifies one of the four simulated metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Confidence,
    StressLevel,
    FocusLevel,
    RiskTolerance,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Confidence => "confidence",
            Metric::StressLevel => "stress_level",
            Metric::FocusLevel => "focus_level",
            Metric::RiskTolerance => "risk_tolerance",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four metric values of one sample, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PsychologyMetrics {
    pub confidence: f64,
    pub stress_level: f64,
    pub focus_level: f64,
    pub risk_tolerance: f64,
}

impl PsychologyMetrics {
    /// Values every monitoring session starts from.
    pub const BASELINE: Self = Self {
        confidence: 50.0,
        stress_level: 30.0,
        focus_level: 70.0,
        risk_tolerance: 60.0,
    };

    /// Builds a sample, clamping every value into range.
    pub fn new(confidence: f64, stress_level: f64, focus_level: f64, risk_tolerance: f64) -> Self {
        Self {
            confidence,
            stress_level,
            focus_level,
            risk_tolerance,
        }
        .clamped()
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Confidence => self.confidence,
            Metric::StressLevel => self.stress_level,
            Metric::FocusLevel => self.focus_level,
            Metric::RiskTolerance => self.risk_tolerance,
        }
    }

    pub fn clamped(self) -> Self {
        Self {
            confidence: clamp_metric(self.confidence),
            stress_level: clamp_metric(self.stress_level),
            focus_level: clamp_metric(self.focus_level),
            risk_tolerance: clamp_metric(self.risk_tolerance),
        }
    }
}

impl Default for PsychologyMetrics {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// Clamps a metric into `[0, 100]`. NaN collapses to the lower bound.
pub fn clamp_metric(value: f64) -> f64 {
    if value.is_nan() {
        return METRIC_MIN;
    }
    value.clamp(METRIC_MIN, METRIC_MAX)
}

/// Maximum drift per tick for each metric.
///
/// A step of `s` lets the metric move by at most `s / 2` in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStepSizes {
    pub confidence: f64,
    pub stress_level: f64,
    pub focus_level: f64,
    pub risk_tolerance: f64,
}

impl MetricStepSizes {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Confidence => self.confidence,
            Metric::StressLevel => self.stress_level,
            Metric::FocusLevel => self.focus_level,
            Metric::RiskTolerance => self.risk_tolerance,
        }
    }

    /// Every step must lie in `[0, 100]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, step) in [
            ("confidence_step", self.confidence),
            ("stress_level_step", self.stress_level),
            ("focus_level_step", self.focus_level),
            ("risk_tolerance_step", self.risk_tolerance),
        ] {
            if !(METRIC_MIN..=METRIC_MAX).contains(&step) {
                return Err(ValidationError::out_of_range(field, 0, 100, step as i32));
            }
        }
        Ok(())
    }
}

impl Default for MetricStepSizes {
    fn default() -> Self {
        Self {
            confidence: 10.0,
            stress_level: 8.0,
            focus_level: 6.0,
            risk_tolerance: 4.0,
        }
    }
}
