//! KeyValueStore port - Persistent key-value storage for saved results.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid store key: '{0}'")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize value for '{key}': {message}")]
    Serialization { key: String, message: String },

    #[error("Failed to deserialize value for '{key}': {message}")]
    Deserialization { key: String, message: String },
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::StorageError
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Port for a JSON-valued key-value store.
///
/// Callers decide how to degrade on failure; adapters only report.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<JsonValue>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: JsonValue) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn KeyValueStore) {}

    #[test]
    fn store_errors_map_to_storage_code() {
        let err = StoreError::Io("disk full".to_string());
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::StorageError);
        assert!(domain.message.contains("disk full"));
    }
}
