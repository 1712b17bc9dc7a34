//! Adapters - Implementations of port interfaces.
//!
//! - `catalog` - Built-in question bank
//! - `clock` - System and manual clocks
//! - `events` - In-memory event bus and logging subscriber
//! - `ids` - Record id generators
//! - `storage` - Key-value stores and the result repository

pub mod catalog;
pub mod clock;
pub mod events;
pub mod ids;
pub mod storage;

pub use catalog::StaticQuestionCatalog;
pub use clock::{ManualClock, SystemClock};
pub use events::{InMemoryEventBus, TelemetryLogHandler, TELEMETRY_LOG_EVENT_TYPES};
pub use ids::{SequentialIdGenerator, UuidIdGenerator};
pub use storage::{
    FileKeyValueStore, InMemoryKeyValueStore, KeyValueResultRepository, SCORE_RESULTS_KEY,
    SESSION_REPORTS_KEY,
};
