//! Monitoring error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the live monitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonitorError {
    /// Operation requires an active monitoring session.
    #[error("No monitoring session is active")]
    NotMonitoring,
}

impl MonitorError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MonitorError::NotMonitoring => ErrorCode::NotMonitoring,
        }
    }
}

impl From<MonitorError> for DomainError {
    fn from(err: MonitorError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
