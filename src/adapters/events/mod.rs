//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus
//! - `TelemetryLogHandler` - Subscriber that logs snapshots and alerts

mod in_memory;
mod telemetry_logger;

pub use in_memory::{InMemoryEventBus, DEFAULT_RETAINED_EVENTS};
pub use telemetry_logger::{TelemetryLogHandler, TELEMETRY_LOG_EVENT_TYPES};
