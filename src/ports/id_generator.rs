//! IdGenerator port - Unique ids for saved records.

use crate::domain::foundation::RecordId;

/// Produces a fresh id for every saved result or report.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> RecordId;
}
