//! Key-value backed result repository.
//!
//! Both histories are stored as one JSON array per key:
//!
//! | Key | Contents | Order |
//! |-----|----------|-------|
//! | `trading_psychology_results` | `StoredScoreResult` | newest first |
//! | `trading_sessions` | `StoredSessionReport` | oldest first |

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::analysis::SessionReport;
use crate::domain::assessment::AssessmentType;
use crate::domain::foundation::RecordId;
use crate::domain::scoring::ScoreResult;
use crate::ports::{
    Clock, IdGenerator, KeyValueStore, ResultRepository, StoreError, StoredScoreResult,
    StoredSessionReport,
};

/// Key holding saved assessment results.
pub const SCORE_RESULTS_KEY: &str = "trading_psychology_results";

/// Key holding saved session reports.
pub const SESSION_REPORTS_KEY: &str = "trading_sessions";

/// `ResultRepository` over any `KeyValueStore`.
pub struct KeyValueResultRepository {
    store: Arc<dyn KeyValueStore>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    // Serializes read-modify-write cycles on the history arrays
    write_lock: Mutex<()>,
}

impl KeyValueResultRepository {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            ids,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.store.get(key).await? {
            None => Ok(Vec::new()),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| StoreError::Deserialization {
                    key: key.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// Loads a history for rewriting. An unreadable value is replaced by
    /// the next save instead of blocking it forever.
    async fn load_for_write<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.load(key).await {
            Err(StoreError::Deserialization { key, message }) => {
                warn!(key = %key, error = %message, "Discarding unreadable history");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    async fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let value = serde_json::to_value(items).map_err(|e| StoreError::Serialization {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(key, value).await
    }
}

#[async_trait]
impl ResultRepository for KeyValueResultRepository {
    async fn save_score_result(
        &self,
        assessment_type: AssessmentType,
        result: &ScoreResult,
    ) -> Result<StoredScoreResult, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut results: Vec<StoredScoreResult> = self.load_for_write(SCORE_RESULTS_KEY).await?;
        let stored = StoredScoreResult {
            id: self.ids.generate(),
            assessment_type,
            saved_at: self.clock.now(),
            result: result.clone(),
        };
        results.insert(0, stored.clone());
        self.save(SCORE_RESULTS_KEY, &results).await?;

        Ok(stored)
    }

    async fn list_score_results(&self) -> Result<Vec<StoredScoreResult>, StoreError> {
        self.load(SCORE_RESULTS_KEY).await
    }

    async fn find_score_result(
        &self,
        id: &RecordId,
    ) -> Result<Option<StoredScoreResult>, StoreError> {
        let results: Vec<StoredScoreResult> = self.load(SCORE_RESULTS_KEY).await?;
        Ok(results.into_iter().find(|r| &r.id == id))
    }

    async fn save_session_report(
        &self,
        report: &SessionReport,
    ) -> Result<StoredSessionReport, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut reports: Vec<StoredSessionReport> =
            self.load_for_write(SESSION_REPORTS_KEY).await?;
        let stored = StoredSessionReport {
            id: self.ids.generate(),
            end_time: self.clock.now(),
            report: report.clone(),
        };
        reports.push(stored.clone());
        self.save(SESSION_REPORTS_KEY, &reports).await?;

        Ok(stored)
    }

    async fn list_session_reports(&self) -> Result<Vec<StoredSessionReport>, StoreError> {
        self.load(SESSION_REPORTS_KEY).await
    }
}
