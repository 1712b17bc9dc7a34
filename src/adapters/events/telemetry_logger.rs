//! Logging subscriber for the monitoring channels.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::domain::telemetry::{AlertLevel, AlertRaised, SnapshotRecorded};
use crate::ports::EventHandler;

/// Event types this handler understands.
pub const TELEMETRY_LOG_EVENT_TYPES: [&str; 2] = [
    "monitoring.snapshot_recorded.v1",
    "monitoring.alert_raised.v1",
];

/// Writes snapshots at debug level and alerts at warn/info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryLogHandler;

fn decode<T: serde::de::DeserializeOwned>(event: &EventEnvelope) -> Result<T, DomainError> {
    event.payload_as().map_err(|e| {
        DomainError::new(ErrorCode::InvalidFormat, format!("Bad payload: {}", e))
            .with_detail("event_type", event.event_type.clone())
    })
}

#[async_trait]
impl EventHandler for TelemetryLogHandler {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        match event.event_type.as_str() {
            "monitoring.snapshot_recorded.v1" => {
                let recorded: SnapshotRecorded = decode(&event)?;
                let m = recorded.snapshot.metrics;
                debug!(
                    session_id = %recorded.session_id,
                    confidence = m.confidence,
                    stress_level = m.stress_level,
                    focus_level = m.focus_level,
                    risk_tolerance = m.risk_tolerance,
                    emotional_state = %recorded.snapshot.emotional_state,
                    "Psychology snapshot"
                );
            }
            "monitoring.alert_raised.v1" => {
                let raised: AlertRaised = decode(&event)?;
                let alert = &raised.alert;
                match alert.level {
                    AlertLevel::High => warn!(
                        session_id = %raised.session_id,
                        metric = %alert.metric,
                        value = alert.value,
                        "Psychology alert: {}",
                        alert.message
                    ),
                    AlertLevel::Medium => info!(
                        session_id = %raised.session_id,
                        metric = %alert.metric,
                        value = alert.value,
                        "Psychology alert: {}",
                        alert.message
                    ),
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "TelemetryLogHandler"
    }
}
