//! Session aggregator - reduces a finished trading session to a report.

use serde::{Deserialize, Serialize};

use super::SessionSummary;
use crate::domain::telemetry::TradingSession;

/// Average stress above this triggers the stress-management bundle.
pub const STRESS_RECOMMENDATION_THRESHOLD: f64 = 60.0;

/// Volatility above this triggers the emotional-stability bundle.
pub const VOLATILITY_RECOMMENDATION_THRESHOLD: f64 = 15.0;

/// Average confidence below this triggers the confidence-building bundle.
pub const CONFIDENCE_RECOMMENDATION_THRESHOLD: f64 = 40.0;

/// Priority level for a session recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    StressManagement,
    EmotionalStability,
    ConfidenceBuilding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation_type: RecommendationType,
    pub priority: Priority,
    pub message: String,
    pub actions: Vec<String>,
}

impl Recommendation {
    fn new(
        recommendation_type: RecommendationType,
        priority: Priority,
        message: &str,
        actions: &[&str],
    ) -> Self {
        Self {
            recommendation_type,
            priority,
            message: message.to_string(),
            actions: actions.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Everything produced when a monitoring session ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub session: TradingSession,
    pub summary: SessionSummary,
    pub recommendations: Vec<Recommendation>,
}

/// Pure reducer over a completed `TradingSession`.
pub struct SessionAggregator;

impl SessionAggregator {
    pub fn summarize(session: &TradingSession) -> SessionSummary {
        SessionSummary::from_snapshots(&session.snapshots)
    }

    /// Every matching rule contributes, in stress, volatility, confidence
    /// order.
    pub fn recommendations(summary: &SessionSummary) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if summary.average_stress > STRESS_RECOMMENDATION_THRESHOLD {
            recommendations.push(Recommendation::new(
                RecommendationType::StressManagement,
                Priority::High,
                "Implement stress reduction techniques before trading sessions",
                &[
                    "Practice deep breathing exercises",
                    "Take regular breaks during trading",
                    "Set realistic profit/loss expectations",
                ],
            ));
        }

        if summary.volatility > VOLATILITY_RECOMMENDATION_THRESHOLD {
            recommendations.push(Recommendation::new(
                RecommendationType::EmotionalStability,
                Priority::Medium,
                "Work on maintaining emotional consistency",
                &[
                    "Develop pre-trade routines",
                    "Use meditation to improve emotional control",
                    "Avoid trading during high emotional states",
                ],
            ));
        }

        if summary.average_confidence < CONFIDENCE_RECOMMENDATION_THRESHOLD {
            recommendations.push(Recommendation::new(
                RecommendationType::ConfidenceBuilding,
                Priority::High,
                "Focus on building trading confidence",
                &[
                    "Review and analyze successful trades",
                    "Paper trade to build skills without risk",
                    "Set smaller, achievable trading goals",
                ],
            ));
        }

        recommendations
    }

    pub fn build_report(session: TradingSession) -> SessionReport {
        let summary = Self::summarize(&session);
        let recommendations = Self::recommendations(&summary);
        SessionReport {
            session,
            summary,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(average_confidence: f64, average_stress: f64, volatility: f64) -> SessionSummary {
        SessionSummary {
            average_confidence,
            average_stress,
            average_focus: 70.0,
            volatility,
            peak_stress: average_stress,
            lowest_confidence: average_confidence,
        }
    }

    fn types(recs: &[Recommendation]) -> Vec<RecommendationType> {
        recs.iter().map(|r| r.recommendation_type).collect()
    }

    #[test]
    fn calm_session_needs_nothing() {
        assert!(SessionAggregator::recommendations(&summary(50.0, 30.0, 5.0)).is_empty());
    }

    #[test]
    fn all_rules_fire_in_fixed_order() {
        let recs = SessionAggregator::recommendations(&summary(30.0, 70.0, 20.0));

        assert_eq!(
            types(&recs),
            vec![
                RecommendationType::StressManagement,
                RecommendationType::EmotionalStability,
                RecommendationType::ConfidenceBuilding,
            ]
        );
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].priority, Priority::Medium);
        assert_eq!(recs[2].actions.len(), 3);
    }

    #[test]
    fn thresholds_are_strict() {
        let recs = SessionAggregator::recommendations(&summary(40.0, 60.0, 15.0));
        assert!(recs.is_empty());
    }

    #[test]
    fn rules_are_independent() {
        let recs = SessionAggregator::recommendations(&summary(35.0, 20.0, 2.0));
        assert_eq!(types(&recs), vec![RecommendationType::ConfidenceBuilding]);
    }

    #[test]
    fn report_keeps_the_session() {
        use crate::domain::foundation::{SessionId, Timestamp};

        let session = TradingSession::start(SessionId::new(), Timestamp::now());
        let report = SessionAggregator::build_report(session.clone());

        assert_eq!(report.session, session);
        assert_eq!(report.summary.average_confidence, 50.0);
        assert_eq!(report.summary.volatility, 0.0);
        assert!(report.recommendations.is_empty());
    }
}
