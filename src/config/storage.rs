//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where saved results and session reports live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file backend, one YAML file per key
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

/// Store implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Lost when the process exits
    #[default]
    Memory,
    File,
}

impl StorageConfig {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.data_dir.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "./data".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_needs_a_directory() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: String::new(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.data_dir"))
        );
    }

    #[test]
    fn memory_backend_ignores_directory() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: String::new(),
        };
        assert!(config.validate().is_ok());
    }
}
