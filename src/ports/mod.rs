//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events
//!
//! ## Content and Storage Ports
//!
//! - `QuestionCatalog` - Question bank keyed by assessment type
//! - `KeyValueStore` - JSON key-value persistence
//! - `ResultRepository` - Typed score result and session report history
//!
//! ## Environment Ports
//!
//! - `Clock` - Current time
//! - `IdGenerator` - Record ids

mod clock;
mod event_publisher;
mod event_subscriber;
mod id_generator;
mod key_value_store;
mod question_catalog;
mod result_repository;

pub use clock::Clock;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use id_generator::IdGenerator;
pub use key_value_store::{KeyValueStore, StoreError};
pub use question_catalog::QuestionCatalog;
pub use result_repository::{ResultRepository, StoredScoreResult, StoredSessionReport};
