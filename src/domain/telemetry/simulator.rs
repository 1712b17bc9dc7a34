//! Bounded random-walk model of the four metrics.

use rand::{Rng, RngCore};

use super::{
    clamp_metric, Alert, AlertThresholds, EmotionalState, MetricStepSizes, PsychologyMetrics,
    PsychologySnapshot, TradingSession,
};
use crate::domain::foundation::Timestamp;

/// Result of advancing a session by one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub snapshot: PsychologySnapshot,
    pub alerts: Vec<Alert>,
}

/// Pure tick logic. Randomness and time are supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PsychologySimulator {
    steps: MetricStepSizes,
    thresholds: AlertThresholds,
}

impl PsychologySimulator {
    pub fn new(steps: MetricStepSizes, thresholds: AlertThresholds) -> Self {
        Self { steps, thresholds }
    }

    pub fn steps(&self) -> &MetricStepSizes {
        &self.steps
    }

    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Moves `value` by a uniform amount in `[-step/2, step/2)` and clamps.
    pub fn drift(value: f64, step: f64, rng: &mut dyn RngCore) -> f64 {
        let offset = rng.gen::<f64>() * step - step / 2.0;
        clamp_metric(value + offset)
    }

    /// Derives the sample that follows `previous`.
    ///
    /// The emotional state is classified from `previous`, the last sample
    /// observed when the tick began.
    pub fn next_snapshot(
        &self,
        previous: &PsychologySnapshot,
        rng: &mut dyn RngCore,
        at: Timestamp,
    ) -> PsychologySnapshot {
        let prev = &previous.metrics;
        let metrics = PsychologyMetrics {
            confidence: Self::drift(prev.confidence, self.steps.confidence, rng),
            stress_level: Self::drift(prev.stress_level, self.steps.stress_level, rng),
            focus_level: Self::drift(prev.focus_level, self.steps.focus_level, rng),
            risk_tolerance: Self::drift(prev.risk_tolerance, self.steps.risk_tolerance, rng),
        };

        PsychologySnapshot {
            metrics,
            emotional_state: EmotionalState::classify(prev),
            timestamp: at,
        }
    }

    /// Appends the next snapshot to `session` and evaluates alerts on it.
    ///
    /// The append and the evaluation happen together; callers holding the
    /// session exclusively never observe one without the other.
    pub fn advance(
        &self,
        session: &mut TradingSession,
        rng: &mut dyn RngCore,
        at: Timestamp,
    ) -> TickOutcome {
        let previous = session.latest_snapshot();
        let snapshot = self.next_snapshot(&previous, rng, at);
        session.push_snapshot(snapshot);
        let alerts = self.thresholds.evaluate(&snapshot);
        TickOutcome { snapshot, alerts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::domain::telemetry::Metric;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const METRICS: [Metric; 4] = [
        Metric::Confidence,
        Metric::StressLevel,
        Metric::FocusLevel,
        Metric::RiskTolerance,
    ];

    #[test]
    fn same_seed_same_trajectory() {
        let sim = PsychologySimulator::default();
        let start = Timestamp::from_unix_secs(1_700_000_000);
        let mut a = TradingSession::start(SessionId::new(), start);
        let mut b = TradingSession::start(SessionId::new(), start);
        let mut rng_a = SmallRng::seed_from_u64(42);
        let mut rng_b = SmallRng::seed_from_u64(42);

        for i in 1..=20 {
            sim.advance(&mut a, &mut rng_a, start.plus_secs(5 * i));
            sim.advance(&mut b, &mut rng_b, start.plus_secs(5 * i));
        }

        assert_eq!(a.snapshots, b.snapshots);
        assert_eq!(a.snapshots.len(), 21);
    }

    #[test]
    fn zero_rng_moves_down_half_a_step() {
        // StepRng(0, 0) always yields 0.0 from gen::<f64>()
        let mut rng = StepRng::new(0, 0);
        let sim = PsychologySimulator::default();
        let baseline = PsychologySnapshot::baseline(Timestamp::now());

        let next = sim.next_snapshot(&baseline, &mut rng, Timestamp::now());

        assert_eq!(next.metrics.confidence, 45.0);
        assert_eq!(next.metrics.stress_level, 26.0);
        assert_eq!(next.metrics.focus_level, 67.0);
        assert_eq!(next.metrics.risk_tolerance, 58.0);
    }

    #[test]
    fn drift_clamps_at_bounds() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(PsychologySimulator::drift(2.0, 10.0, &mut rng), 0.0);
        let mut rng = StepRng::new(u64::MAX, 0);
        assert_eq!(PsychologySimulator::drift(99.0, 10.0, &mut rng), 100.0);
    }

    #[test]
    fn emotional_state_comes_from_previous_sample() {
        let sim = PsychologySimulator::default();
        let previous = PsychologySnapshot {
            metrics: PsychologyMetrics::new(90.0, 10.0, 50.0, 50.0),
            emotional_state: EmotionalState::Neutral,
            timestamp: Timestamp::now(),
        };
        let mut rng = StepRng::new(0, 0);

        let next = sim.next_snapshot(&previous, &mut rng, Timestamp::now());

        assert_eq!(next.emotional_state, EmotionalState::Confident);
    }

    #[test]
    fn advance_reports_alerts_for_new_snapshot() {
        let thresholds = AlertThresholds {
            stress_high: 0.0,
            ..Default::default()
        };
        let sim = PsychologySimulator::new(MetricStepSizes::default(), thresholds);
        let mut session = TradingSession::start(SessionId::new(), Timestamp::now());
        let mut rng = SmallRng::seed_from_u64(7);

        let outcome = sim.advance(&mut session, &mut rng, Timestamp::now());

        assert_eq!(session.snapshots.len(), 2);
        assert_eq!(session.latest_snapshot(), outcome.snapshot);
        assert_eq!(outcome.alerts.len(), 1);
        assert_eq!(outcome.alerts[0].metric, Metric::StressLevel);
    }

    proptest! {
        #[test]
        fn metrics_stay_in_range(seed in any::<u64>(), ticks in 1usize..200) {
            let sim = PsychologySimulator::default();
            let mut session = TradingSession::start(SessionId::new(), Timestamp::now());
            let mut rng = SmallRng::seed_from_u64(seed);
            for _ in 0..ticks {
                sim.advance(&mut session, &mut rng, Timestamp::now());
            }
            for snapshot in &session.snapshots {
                for metric in METRICS {
                    let v = snapshot.metrics.get(metric);
                    prop_assert!((0.0..=100.0).contains(&v), "{} = {}", metric, v);
                }
            }
        }

        #[test]
        fn one_tick_moves_at_most_half_a_step(seed in any::<u64>()) {
            let sim = PsychologySimulator::default();
            let baseline = PsychologySnapshot::baseline(Timestamp::now());
            let mut rng = SmallRng::seed_from_u64(seed);

            let next = sim.next_snapshot(&baseline, &mut rng, Timestamp::now());

            for metric in METRICS {
                let moved = (next.metrics.get(metric) - baseline.metrics.get(metric)).abs();
                prop_assert!(moved <= sim.steps().get(metric) / 2.0);
            }
        }
    }
}
