//! Live monitoring service.

mod live_monitor;

pub use live_monitor::{LiveMonitor, LiveMonitorConfig, RngSource, DEFAULT_TICK_INTERVAL};
