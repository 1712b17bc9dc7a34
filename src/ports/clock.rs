//! Clock port - Source of wall-clock timestamps.

use crate::domain::foundation::Timestamp;

/// Supplies the current time to services that stamp records.
///
/// Tick scheduling runs on tokio time; this port only decides what
/// timestamp a snapshot, trade or saved record carries.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
