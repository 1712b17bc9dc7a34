//! Result history queries.
//!
//! Reads degrade to an empty history or `None` when the store fails.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::RecordId;
use crate::ports::{ResultRepository, StoredScoreResult, StoredSessionReport};

/// Query handler over saved score results and session reports.
pub struct ResultHistoryHandler {
    repository: Arc<dyn ResultRepository>,
}

impl ResultHistoryHandler {
    pub fn new(repository: Arc<dyn ResultRepository>) -> Self {
        Self { repository }
    }

    /// Saved score results, newest first.
    pub async fn list_score_results(&self) -> Vec<StoredScoreResult> {
        self.repository
            .list_score_results()
            .await
            .unwrap_or_else(|error| {
                warn!(error = %error, "Failed to load score results");
                Vec::new()
            })
    }

    pub async fn find_score_result(&self, id: &RecordId) -> Option<StoredScoreResult> {
        self.repository
            .find_score_result(id)
            .await
            .unwrap_or_else(|error| {
                warn!(record_id = %id, error = %error, "Failed to load score result");
                None
            })
    }

    /// Saved session reports, oldest first.
    pub async fn list_session_reports(&self) -> Vec<StoredSessionReport> {
        self.repository
            .list_session_reports()
            .await
            .unwrap_or_else(|error| {
                warn!(error = %error, "Failed to load session history");
                Vec::new()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::SessionReport;
    use crate::domain::assessment::AssessmentType;
    use crate::domain::scoring::ScoreResult;
    use crate::ports::StoreError;
    use async_trait::async_trait;

    struct BrokenRepository;

    #[async_trait]
    impl ResultRepository for BrokenRepository {
        async fn save_score_result(
            &self,
            _: AssessmentType,
            _: &ScoreResult,
        ) -> Result<StoredScoreResult, StoreError> {
            Err(StoreError::Io("offline".to_string()))
        }

        async fn list_score_results(&self) -> Result<Vec<StoredScoreResult>, StoreError> {
            Err(StoreError::Deserialization {
                key: "trading_psychology_results".to_string(),
                message: "not a list".to_string(),
            })
        }

        async fn find_score_result(
            &self,
            _: &RecordId,
        ) -> Result<Option<StoredScoreResult>, StoreError> {
            Err(StoreError::Io("offline".to_string()))
        }

        async fn save_session_report(
            &self,
            _: &SessionReport,
        ) -> Result<StoredSessionReport, StoreError> {
            Err(StoreError::Io("offline".to_string()))
        }

        async fn list_session_reports(&self) -> Result<Vec<StoredSessionReport>, StoreError> {
            Err(StoreError::Io("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn failures_degrade_to_empty() {
        let handler = ResultHistoryHandler::new(Arc::new(BrokenRepository));

        assert!(handler.list_score_results().await.is_empty());
        assert!(handler.list_session_reports().await.is_empty());
        assert!(handler
            .find_score_result(&RecordId::from_sequence("rec", 1))
            .await
            .is_none());
    }
}
