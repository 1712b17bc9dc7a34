//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, events, errors)
//! - `assessment` - Questionnaire types and the assessment session walker
//! - `scoring` - Rubric scoring and recommendation catalogs
//! - `telemetry` - Simulated psychology metrics, alerts and trades
//! - `analysis` - End-of-session summaries and recommendations

pub mod analysis;
pub mod assessment;
pub mod foundation;
pub mod scoring;
pub mod telemetry;
