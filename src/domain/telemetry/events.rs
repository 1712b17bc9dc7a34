//! Monitoring domain events.
//!
//! - `MonitoringStarted` / `MonitoringStopped` - session boundaries
//! - `SnapshotRecorded` - live feed, one per tick
//! - `AlertRaised` - one per threshold crossing
//! - `TradeRecorded` - trade plus its impact estimate

use serde::{Deserialize, Serialize};

use super::{Alert, PsychologyImpact, PsychologySnapshot, Trade};
use crate::domain::foundation::{domain_event, EventId, SessionId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringStarted {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub started_at: Timestamp,
}

domain_event!(
    MonitoringStarted,
    event_type = "monitoring.started.v1",
    aggregate_id = session_id,
    aggregate_type = "TradingSession",
    occurred_at = started_at,
    event_id = event_id
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecorded {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub snapshot: PsychologySnapshot,
    pub recorded_at: Timestamp,
}

domain_event!(
    SnapshotRecorded,
    event_type = "monitoring.snapshot_recorded.v1",
    aggregate_id = session_id,
    aggregate_type = "TradingSession",
    occurred_at = recorded_at,
    event_id = event_id
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRaised {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub alert: Alert,
    pub raised_at: Timestamp,
}

domain_event!(
    AlertRaised,
    event_type = "monitoring.alert_raised.v1",
    aggregate_id = session_id,
    aggregate_type = "TradingSession",
    occurred_at = raised_at,
    event_id = event_id
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecorded {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub trade: Trade,
    pub impact: PsychologyImpact,
    pub recorded_at: Timestamp,
}

domain_event!(
    TradeRecorded,
    event_type = "monitoring.trade_recorded.v1",
    aggregate_id = session_id,
    aggregate_type = "TradingSession",
    occurred_at = recorded_at,
    event_id = event_id
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringStopped {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub snapshot_count: usize,
    pub trade_count: usize,
    pub stopped_at: Timestamp,
}

domain_event!(
    MonitoringStopped,
    event_type = "monitoring.stopped.v1",
    aggregate_id = session_id,
    aggregate_type = "TradingSession",
    occurred_at = stopped_at,
    event_id = event_id
);
