use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Whether a live monitor currently owns a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorStatus {
    #[default]
    Idle,
    Monitoring,
}

impl StateMachine for MonitorStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (MonitorStatus::Idle, MonitorStatus::Monitoring)
                | (MonitorStatus::Monitoring, MonitorStatus::Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            MonitorStatus::Idle => vec![MonitorStatus::Monitoring],
            MonitorStatus::Monitoring => vec![MonitorStatus::Idle],
        }
    }
}
