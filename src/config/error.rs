//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Tick interval must be between 1 and {max} seconds, got {actual}")]
    InvalidTickInterval { max: u64, actual: u64 },

    #[error("Step size for {metric} must be within 0..=100, got {value}")]
    InvalidStepSize { metric: &'static str, value: f64 },

    #[error("Alert threshold {threshold} must be within 0..=100, got {value}")]
    InvalidThreshold { threshold: &'static str, value: f64 },

    #[error("Unknown assessment type '{0}'")]
    UnknownAssessmentType(String),

    #[error("Invalid log level directive '{0}'")]
    InvalidLogLevel(String),
}
