//! LiveMonitor - Drives a simulated trading session on a fixed cadence.
//!
//! A background ticker advances the active `TradingSession` once per
//! period, publishing every snapshot and alert. Trades may be recorded at
//! any time while monitoring. Stopping hands the session to the
//! `SessionAggregator` and saves the resulting report.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `tick_interval` | 5s | Time between simulated samples |
//! | `simulator` | default steps and thresholds | Random-walk model |
//! | `rng` | entropy | Random source for each new session |
//!
//! ## Concurrency
//!
//! All session state sits behind one async mutex. A tick appends its
//! snapshot and evaluates alerts while holding it, so a concurrent stop
//! either sees the whole tick or none of it. Events are published after the
//! lock is released.

use std::sync::{Arc, Weak};
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use tokio::sync::{watch, Mutex};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::application::handlers::notify::publish_or_log;
use crate::domain::analysis::{SessionAggregator, SessionReport};
use crate::domain::foundation::{EventId, SerializableDomainEvent, SessionId};
use crate::domain::telemetry::{
    AlertRaised, MonitorError, MonitorStatus, MonitoringStarted, MonitoringStopped,
    PsychologyImpact, PsychologySimulator, PsychologySnapshot, SnapshotRecorded, TickOutcome,
    Trade, TradeInput, TradeRecorded, TradingSession,
};
use crate::ports::{Clock, EventPublisher, ResultRepository, StoredSessionReport};

/// Default time between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(5);

const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Where each session's random source comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RngSource {
    /// Freshly seeded from the operating system.
    #[default]
    Entropy,
    /// Every session replays the same trajectory.
    Seeded(u64),
}

impl RngSource {
    pub fn build(&self) -> Box<dyn RngCore + Send> {
        match self {
            RngSource::Entropy => Box::new(SmallRng::from_entropy()),
            RngSource::Seeded(seed) => Box::new(SmallRng::seed_from_u64(*seed)),
        }
    }
}

/// Configuration for the LiveMonitor.
#[derive(Debug, Clone, Copy)]
pub struct LiveMonitorConfig {
    tick_interval: Duration,
    simulator: PsychologySimulator,
    rng: RngSource,
}

impl Default for LiveMonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            simulator: PsychologySimulator::default(),
            rng: RngSource::default(),
        }
    }
}

impl LiveMonitorConfig {
    /// Sets the tick period; values under one millisecond are raised to it.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(MIN_TICK_INTERVAL);
        self
    }

    pub fn with_simulator(mut self, simulator: PsychologySimulator) -> Self {
        self.simulator = simulator;
        self
    }

    pub fn with_rng(mut self, rng: RngSource) -> Self {
        self.rng = rng;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn simulator(&self) -> &PsychologySimulator {
        &self.simulator
    }

    pub fn rng(&self) -> RngSource {
        self.rng
    }
}

/// The session currently being monitored.
struct ActiveSession {
    session: TradingSession,
    rng: Box<dyn RngCore + Send>,
    shutdown: watch::Sender<bool>,
}

enum MonitorState {
    Idle,
    Monitoring(ActiveSession),
}

impl MonitorState {
    fn status(&self) -> MonitorStatus {
        match self {
            MonitorState::Idle => MonitorStatus::Idle,
            MonitorState::Monitoring(_) => MonitorStatus::Monitoring,
        }
    }
}

struct MonitorInner {
    config: LiveMonitorConfig,
    event_publisher: Arc<dyn EventPublisher>,
    repository: Arc<dyn ResultRepository>,
    clock: Arc<dyn Clock>,
    state: Mutex<MonitorState>,
}

/// Live psychology monitor.
///
/// Cheap to clone; clones share the same session. Must be used from within
/// a tokio runtime, since starting spawns the ticker task.
#[derive(Clone)]
pub struct LiveMonitor {
    inner: Arc<MonitorInner>,
}

impl LiveMonitor {
    pub fn new(
        config: LiveMonitorConfig,
        event_publisher: Arc<dyn EventPublisher>,
        repository: Arc<dyn ResultRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: Arc::new(MonitorInner {
                config,
                event_publisher,
                repository,
                clock,
                state: Mutex::new(MonitorState::Idle),
            }),
        }
    }

    pub fn config(&self) -> &LiveMonitorConfig {
        &self.inner.config
    }

    /// Opens a session seeded with the baseline snapshot and arms the ticker.
    ///
    /// Calling this while already monitoring returns the active session id.
    pub async fn start_monitoring(&self) -> SessionId {
        let mut state = self.inner.state.lock().await;
        if let MonitorState::Monitoring(active) = &*state {
            debug!(session_id = %active.session.id, "Monitoring already active");
            return active.session.id;
        }

        let started_at = self.inner.clock.now();
        let session = TradingSession::start(SessionId::new(), started_at);
        let session_id = session.id;
        let (shutdown, shutdown_rx) = watch::channel(false);

        *state = MonitorState::Monitoring(ActiveSession {
            session,
            rng: self.inner.config.rng.build(),
            shutdown,
        });
        drop(state);

        tokio::spawn(run_ticker(
            Arc::downgrade(&self.inner),
            session_id,
            self.inner.config.tick_interval,
            shutdown_rx,
        ));

        info!(
            session_id = %session_id,
            tick_interval_ms = self.inner.config.tick_interval.as_millis() as u64,
            "Monitoring started"
        );

        let event = MonitoringStarted {
            event_id: EventId::new(),
            session_id,
            started_at,
        };
        self.inner.publish(session_id, event).await;

        session_id
    }

    /// Advances the active session by one tick immediately.
    ///
    /// # Errors
    ///
    /// - `NotMonitoring` if no session is active
    pub async fn tick(&self) -> Result<TickOutcome, MonitorError> {
        self.inner.tick(None).await
    }

    /// Records a trade against the current snapshot.
    ///
    /// The returned impact is descriptive only; live metrics are unchanged.
    ///
    /// # Errors
    ///
    /// - `NotMonitoring` if no session is active; nothing is recorded
    pub async fn record_trade(
        &self,
        input: TradeInput,
    ) -> Result<(Trade, PsychologyImpact), MonitorError> {
        let (session_id, trade, impact) = {
            let mut state = self.inner.state.lock().await;
            let MonitorState::Monitoring(active) = &mut *state else {
                debug!("Trade rejected, not monitoring");
                return Err(MonitorError::NotMonitoring);
            };
            let (trade, impact) = active.session.record_trade(input, self.inner.clock.now());
            (active.session.id, trade, impact)
        };

        info!(
            session_id = %session_id,
            sequence = trade.sequence,
            trade_type = ?trade.trade_type,
            outcome = ?trade.outcome,
            "Trade recorded"
        );

        let event = TradeRecorded {
            event_id: EventId::new(),
            session_id,
            trade: trade.clone(),
            impact: impact.clone(),
            recorded_at: trade.timestamp,
        };
        self.inner.publish(session_id, event).await;

        Ok((trade, impact))
    }

    /// Disarms the ticker and reduces the session to a report.
    ///
    /// The report is saved; a store failure is logged and the report is
    /// still returned. Returns `None` when idle.
    pub async fn stop_monitoring(&self) -> Option<SessionReport> {
        let active = {
            let mut state = self.inner.state.lock().await;
            match std::mem::replace(&mut *state, MonitorState::Idle) {
                MonitorState::Idle => return None,
                MonitorState::Monitoring(active) => active,
            }
        };

        if active.shutdown.send(true).is_err() {
            debug!(session_id = %active.session.id, "Ticker already gone");
        }

        let stopped_at = self.inner.clock.now();
        let report = SessionAggregator::build_report(active.session);
        let session_id = report.session.id;

        info!(
            session_id = %session_id,
            snapshots = report.session.snapshots.len(),
            trades = report.session.trades.len(),
            recommendations = report.recommendations.len(),
            "Monitoring stopped"
        );

        match self.inner.repository.save_session_report(&report).await {
            Ok(stored) => info!(record_id = %stored.id, "Session report saved"),
            Err(error) => warn!(
                session_id = %session_id,
                error = %error,
                "Failed to save session report"
            ),
        }

        let event = MonitoringStopped {
            event_id: EventId::new(),
            session_id,
            snapshot_count: report.session.snapshots.len(),
            trade_count: report.session.trades.len(),
            stopped_at,
        };
        self.inner.publish(session_id, event).await;

        Some(report)
    }

    /// Latest snapshot of the active session.
    pub async fn current_snapshot(&self) -> Option<PsychologySnapshot> {
        match &*self.inner.state.lock().await {
            MonitorState::Monitoring(active) => Some(active.session.latest_snapshot()),
            MonitorState::Idle => None,
        }
    }

    /// Copy of the active session.
    pub async fn session(&self) -> Option<TradingSession> {
        match &*self.inner.state.lock().await {
            MonitorState::Monitoring(active) => Some(active.session.clone()),
            MonitorState::Idle => None,
        }
    }

    pub async fn status(&self) -> MonitorStatus {
        self.inner.state.lock().await.status()
    }

    pub async fn is_monitoring(&self) -> bool {
        self.status().await == MonitorStatus::Monitoring
    }

    /// Saved session reports, oldest first; empty if the store fails.
    pub async fn session_history(&self) -> Vec<StoredSessionReport> {
        self.inner
            .repository
            .list_session_reports()
            .await
            .unwrap_or_else(|error| {
                warn!(error = %error, "Failed to load session history");
                Vec::new()
            })
    }
}

impl MonitorInner {
    /// Advances the active session, optionally only if it is `expected`.
    async fn tick(&self, expected: Option<SessionId>) -> Result<TickOutcome, MonitorError> {
        let (session_id, outcome) = {
            let mut state = self.state.lock().await;
            let active = match &mut *state {
                MonitorState::Monitoring(active)
                    if expected.map_or(true, |id| id == active.session.id) =>
                {
                    active
                }
                _ => return Err(MonitorError::NotMonitoring),
            };

            let at = self.clock.now();
            let outcome = self
                .config
                .simulator
                .advance(&mut active.session, active.rng.as_mut(), at);
            (active.session.id, outcome)
        };

        debug!(
            session_id = %session_id,
            confidence = outcome.snapshot.metrics.confidence,
            stress_level = outcome.snapshot.metrics.stress_level,
            emotional_state = ?outcome.snapshot.emotional_state,
            alerts = outcome.alerts.len(),
            "Tick"
        );

        let recorded_at = outcome.snapshot.timestamp;
        self.publish(
            session_id,
            SnapshotRecorded {
                event_id: EventId::new(),
                session_id,
                snapshot: outcome.snapshot,
                recorded_at,
            },
        )
        .await;

        for alert in &outcome.alerts {
            self.publish(
                session_id,
                AlertRaised {
                    event_id: EventId::new(),
                    session_id,
                    alert: alert.clone(),
                    raised_at: alert.timestamp,
                },
            )
            .await;
        }

        Ok(outcome)
    }

    async fn publish<E: SerializableDomainEvent>(&self, session_id: SessionId, event: E) {
        let envelope = event
            .to_envelope()
            .map(|e| e.with_correlation_id(session_id.to_string()));
        publish_or_log(self.event_publisher.as_ref(), envelope).await;
    }
}

/// Ticks `session_id` every `period` until shutdown, the session ends, or
/// the monitor is dropped.
async fn run_ticker(
    monitor: Weak<MonitorInner>,
    session_id: SessionId,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    // First simulated sample arrives one period after start
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = shutdown.changed() => break,

            _ = interval.tick() => {
                let Some(monitor) = monitor.upgrade() else {
                    break;
                };
                if monitor.tick(Some(session_id)).await.is_err() {
                    break;
                }
            }
        }
    }

    debug!(session_id = %session_id, "Ticker stopped");
}
