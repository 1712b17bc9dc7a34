//! ResultRepository port - Typed persistence of score results and session
//! reports.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::domain::analysis::SessionReport;
use crate::domain::assessment::AssessmentType;
use crate::domain::foundation::{RecordId, Timestamp};
use crate::domain::scoring::ScoreResult;

/// A saved assessment result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredScoreResult {
    pub id: RecordId,
    pub assessment_type: AssessmentType,
    pub saved_at: Timestamp,
    pub result: ScoreResult,
}

/// A saved end-of-session report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSessionReport {
    pub id: RecordId,
    pub end_time: Timestamp,
    pub report: SessionReport,
}

/// Port for result history.
///
/// Score results are listed newest first; session reports in the order
/// they were saved.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn save_score_result(
        &self,
        assessment_type: AssessmentType,
        result: &ScoreResult,
    ) -> Result<StoredScoreResult, StoreError>;

    async fn list_score_results(&self) -> Result<Vec<StoredScoreResult>, StoreError>;

    async fn find_score_result(
        &self,
        id: &RecordId,
    ) -> Result<Option<StoredScoreResult>, StoreError>;

    async fn save_session_report(
        &self,
        report: &SessionReport,
    ) -> Result<StoredSessionReport, StoreError>;

    async fn list_session_reports(&self) -> Result<Vec<StoredSessionReport>, StoreError>;
}
