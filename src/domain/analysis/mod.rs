//! Analysis Module - Pure reduction of finished trading sessions.
//!
//! # Components
//!
//! - `SessionSummary` - Averages, extremes and confidence volatility
//! - `SessionAggregator` - Summary plus rule-based recommendations
//!
//! All functions are pure and stateless; no ports are involved.

mod session_aggregator;
mod summary;

pub use session_aggregator::{
    Priority, Recommendation, RecommendationType, SessionAggregator, SessionReport,
    CONFIDENCE_RECOMMENDATION_THRESHOLD, STRESS_RECOMMENDATION_THRESHOLD,
    VOLATILITY_RECOMMENDATION_THRESHOLD,
};
pub use summary::{volatility, SessionSummary};
