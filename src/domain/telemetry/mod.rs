//! Telemetry domain - simulated psychological state during a trading session.
//!
//! # Components
//!
//! - `PsychologyMetrics` / `PsychologySnapshot` - metric samples
//! - `EmotionalState` - priority-ordered classification of a sample
//! - `PsychologySimulator` - bounded random walk plus alert evaluation
//! - `TradingSession` - append-only snapshot and trade log
//! - `AlertThresholds` - threshold crossing detection

mod alert;
mod errors;
mod events;
mod metrics;
mod session;
mod simulator;
mod snapshot;
mod status;
mod trade;

pub use alert::{Alert, AlertLevel, AlertThresholds, AlertType};
pub use errors::MonitorError;
pub use events::{AlertRaised, MonitoringStarted, MonitoringStopped, SnapshotRecorded, TradeRecorded};
pub use metrics::{clamp_metric, Metric, MetricStepSizes, PsychologyMetrics, METRIC_MAX, METRIC_MIN};
pub use session::TradingSession;
pub use simulator::{PsychologySimulator, TickOutcome};
pub use snapshot::{EmotionalState, PsychologySnapshot};
pub use status::MonitorStatus;
pub use trade::{PsychologyChanges, PsychologyImpact, Trade, TradeInput, TradeOutcome, TradeType};
