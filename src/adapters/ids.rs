//! Id generator adapters.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::domain::foundation::RecordId;
use crate::ports::IdGenerator;

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> RecordId {
        RecordId::from_uuid(Uuid::new_v4())
    }
}

/// Predictable `<prefix>-<n>` ids, starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> RecordId {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        RecordId::from_sequence(&self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_ids_are_unique() {
        let ids: HashSet<RecordId> = (0..100).map(|_| UuidIdGenerator.generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new("rec");
        assert_eq!(ids.generate().as_str(), "rec-1");
        assert_eq!(ids.generate().as_str(), "rec-2");
    }
}
