//! Trades recorded during a monitoring session.

use serde::{Deserialize, Serialize};

use super::PsychologySnapshot;
use crate::domain::foundation::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeType {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeOutcome {
    Win,
    Loss,
    BreakEven,
}

/// Caller-supplied part of a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInput {
    pub trade_type: TradeType,
    pub outcome: TradeOutcome,
    #[serde(default)]
    pub notes: String,
}

impl TradeInput {
    pub fn new(trade_type: TradeType, outcome: TradeOutcome) -> Self {
        Self {
            trade_type,
            outcome,
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// A trade with the snapshot that was current when it was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Position of the trade within its session, starting at 0.
    pub sequence: usize,
    pub trade_type: TradeType,
    pub outcome: TradeOutcome,
    pub notes: String,
    pub timestamp: Timestamp,
    pub psychology_snapshot: PsychologySnapshot,
}

/// Estimated metric changes caused by a trade outcome.
///
/// Descriptive only; never applied to the live metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PsychologyChanges {
    pub confidence_change: f64,
    pub stress_change: f64,
    pub focus_change: f64,
}

impl PsychologyChanges {
    /// Wins lift confidence and ease stress. Losses and break-evens do the
    /// opposite, more strongly. Focus always dips.
    pub fn estimate(outcome: TradeOutcome) -> Self {
        let (confidence_change, stress_change) = match outcome {
            TradeOutcome::Win => (5.0, -5.0),
            TradeOutcome::Loss | TradeOutcome::BreakEven => (-10.0, 15.0),
        };
        Self {
            confidence_change,
            stress_change,
            focus_change: -2.0,
        }
    }
}

/// Analysis returned to whoever recorded a trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsychologyImpact {
    pub trade_sequence: usize,
    pub pre_trade_psychology: PsychologySnapshot,
    pub psychology_changes: PsychologyChanges,
}

impl PsychologyImpact {
    pub fn of(trade: &Trade) -> Self {
        Self {
            trade_sequence: trade.sequence,
            pre_trade_psychology: trade.psychology_snapshot,
            psychology_changes: PsychologyChanges::estimate(trade.outcome),
        }
    }
}
