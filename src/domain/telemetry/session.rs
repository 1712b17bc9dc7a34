//! Trading session - the append-only log of one monitoring run.

use serde::{Deserialize, Serialize};

use super::{PsychologyImpact, PsychologySnapshot, Trade, TradeInput};
use crate::domain::foundation::{SessionId, Timestamp};

/// Snapshots and trades collected between start and stop of monitoring.
///
/// Both lists only grow. A new session always holds the baseline snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSession {
    pub id: SessionId,
    pub start_time: Timestamp,
    pub snapshots: Vec<PsychologySnapshot>,
    pub trades: Vec<Trade>,
}

impl TradingSession {
    /// Opens a session seeded with the baseline snapshot.
    pub fn start(id: SessionId, start_time: Timestamp) -> Self {
        Self {
            id,
            start_time,
            snapshots: vec![PsychologySnapshot::baseline(start_time)],
            trades: Vec::new(),
        }
    }

    /// Most recent snapshot, falling back to the baseline.
    pub fn latest_snapshot(&self) -> PsychologySnapshot {
        self.snapshots
            .last()
            .copied()
            .unwrap_or_else(|| PsychologySnapshot::baseline(self.start_time))
    }

    pub fn push_snapshot(&mut self, snapshot: PsychologySnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Appends a trade stamped with the current snapshot and returns it with
    /// its impact estimate.
    pub fn record_trade(&mut self, input: TradeInput, at: Timestamp) -> (Trade, PsychologyImpact) {
        let trade = Trade {
            sequence: self.trades.len(),
            trade_type: input.trade_type,
            outcome: input.outcome,
            notes: input.notes,
            timestamp: at,
            psychology_snapshot: self.latest_snapshot(),
        };
        let impact = PsychologyImpact::of(&trade);
        self.trades.push(trade.clone());
        (trade, impact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::{PsychologyMetrics, TradeOutcome, TradeType};

    #[test]
    fn start_seeds_baseline() {
        let at = Timestamp::from_unix_secs(1_700_000_000);
        let session = TradingSession::start(SessionId::new(), at);

        assert_eq!(session.snapshots.len(), 1);
        assert_eq!(session.snapshots[0].metrics, PsychologyMetrics::BASELINE);
        assert_eq!(session.snapshots[0].timestamp, at);
        assert!(session.trades.is_empty());
    }

    #[test]
    fn record_trade_copies_latest_snapshot() {
        let at = Timestamp::from_unix_secs(1_700_000_000);
        let mut session = TradingSession::start(SessionId::new(), at);
        let mut later = session.latest_snapshot();
        later.metrics.confidence = 64.0;
        later.timestamp = at.plus_secs(5);
        session.push_snapshot(later);

        let (trade, impact) = session.record_trade(
            TradeInput::new(TradeType::Buy, TradeOutcome::Win).with_notes("breakout"),
            at.plus_secs(7),
        );

        assert_eq!(trade.sequence, 0);
        assert_eq!(trade.psychology_snapshot.metrics.confidence, 64.0);
        assert_eq!(trade.notes, "breakout");
        assert_eq!(impact.pre_trade_psychology, later);
        assert_eq!(session.trades, vec![trade]);
    }

    #[test]
    fn trades_are_numbered_in_order() {
        let mut session = TradingSession::start(SessionId::new(), Timestamp::now());
        session.record_trade(TradeInput::new(TradeType::Buy, TradeOutcome::Loss), Timestamp::now());
        let (second, _) =
            session.record_trade(TradeInput::new(TradeType::Sell, TradeOutcome::Win), Timestamp::now());
        assert_eq!(second.sequence, 1);
    }
}
