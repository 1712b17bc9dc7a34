//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TRADER_PSYCHE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use trader_psyche::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Ticking every {:?}", config.monitor.tick_interval());
//! ```

mod assessment;
mod error;
mod monitor;
mod runtime;
mod storage;

pub use assessment::AssessmentConfig;
pub use error::{ConfigError, ValidationError};
pub use monitor::{MonitorConfig, MAX_TICK_INTERVAL_SECS};
pub use runtime::{Environment, LogFormat, RuntimeConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment name and logging
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Live monitor cadence, randomness, step sizes and thresholds
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Result store backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Questionnaire defaults
    #[serde(default)]
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TRADER_PSYCHE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TRADER_PSYCHE__MONITOR__TICK_INTERVAL_SECS=5` -> `monitor.tick_interval_secs = 5`
    /// - `TRADER_PSYCHE__STORAGE__BACKEND=file` -> `storage.backend = file`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRADER_PSYCHE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        self.monitor.validate()?;
        self.storage.validate()?;
        self.assessment.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}
