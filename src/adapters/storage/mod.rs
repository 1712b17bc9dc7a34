//! Storage Adapters
//!
//! Implementations of the `KeyValueStore` and `ResultRepository` ports.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - One YAML file per key on disk
//! - **InMemoryKeyValueStore** - Values kept in memory (testing/ephemeral runs)
//! - **KeyValueResultRepository** - Result history over either store
//!
//! ## Usage
//!
//! ```ignore
//! let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new("./data"));
//! let repo = KeyValueResultRepository::new(store, Arc::new(UuidIdGenerator), Arc::new(SystemClock));
//! ```

mod file_store;
mod in_memory_store;
mod result_repository;

pub use file_store::FileKeyValueStore;
pub use in_memory_store::InMemoryKeyValueStore;
pub use result_repository::{KeyValueResultRepository, SCORE_RESULTS_KEY, SESSION_REPORTS_KEY};
