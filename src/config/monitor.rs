//! Live monitor configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::telemetry::{AlertThresholds, MetricStepSizes, METRIC_MAX, METRIC_MIN};

/// Longest accepted tick interval (one hour)
pub const MAX_TICK_INTERVAL_SECS: u64 = 3600;

/// Simulator cadence, random source, step sizes and alert thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between simulated samples
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,

    /// Fixed seed for reproducible sessions; entropy when unset
    pub rng_seed: Option<u64>,

    #[serde(default = "default_confidence_step")]
    pub confidence_step: f64,

    #[serde(default = "default_stress_step")]
    pub stress_step: f64,

    #[serde(default = "default_focus_step")]
    pub focus_step: f64,

    #[serde(default = "default_risk_tolerance_step")]
    pub risk_tolerance_step: f64,

    /// Stress above this raises a high-level alert
    #[serde(default = "default_stress_high")]
    pub stress_high: f64,

    /// Confidence below this raises a high-level alert
    #[serde(default = "default_confidence_low")]
    pub confidence_low: f64,

    /// Focus below this raises a medium-level alert
    #[serde(default = "default_focus_low")]
    pub focus_low: f64,
}

impl MonitorConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    pub fn steps(&self) -> MetricStepSizes {
        MetricStepSizes {
            confidence: self.confidence_step,
            stress_level: self.stress_step,
            focus_level: self.focus_step,
            risk_tolerance: self.risk_tolerance_step,
        }
    }

    pub fn thresholds(&self) -> AlertThresholds {
        AlertThresholds {
            stress_high: self.stress_high,
            confidence_low: self.confidence_low,
            focus_low: self.focus_low,
        }
    }

    /// Validate monitor configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tick_interval_secs == 0 || self.tick_interval_secs > MAX_TICK_INTERVAL_SECS {
            return Err(ValidationError::InvalidTickInterval {
                max: MAX_TICK_INTERVAL_SECS,
                actual: self.tick_interval_secs,
            });
        }

        for (metric, value) in [
            ("confidence", self.confidence_step),
            ("stress_level", self.stress_step),
            ("focus_level", self.focus_step),
            ("risk_tolerance", self.risk_tolerance_step),
        ] {
            if !in_metric_range(value) {
                return Err(ValidationError::InvalidStepSize { metric, value });
            }
        }

        for (threshold, value) in [
            ("stress_high", self.stress_high),
            ("confidence_low", self.confidence_low),
            ("focus_low", self.focus_low),
        ] {
            if !in_metric_range(value) {
                return Err(ValidationError::InvalidThreshold { threshold, value });
            }
        }

        Ok(())
    }
}

fn in_metric_range(value: f64) -> bool {
    (METRIC_MIN..=METRIC_MAX).contains(&value)
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: default_tick_interval_secs(),
            rng_seed: None,
            confidence_step: default_confidence_step(),
            stress_step: default_stress_step(),
            focus_step: default_focus_step(),
            risk_tolerance_step: default_risk_tolerance_step(),
            stress_high: default_stress_high(),
            confidence_low: default_confidence_low(),
            focus_low: default_focus_low(),
        }
    }
}

fn default_tick_interval_secs() -> u64 {
    5
}

fn default_confidence_step() -> f64 {
    MetricStepSizes::default().confidence
}

fn default_stress_step() -> f64 {
    MetricStepSizes::default().stress_level
}

fn default_focus_step() -> f64 {
    MetricStepSizes::default().focus_level
}

fn default_risk_tolerance_step() -> f64 {
    MetricStepSizes::default().risk_tolerance
}

fn default_stress_high() -> f64 {
    AlertThresholds::default().stress_high
}

fn default_confidence_low() -> f64 {
    AlertThresholds::default().confidence_low
}

fn default_focus_low() -> f64 {
    AlertThresholds::default().focus_low
}
