use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::time::Duration;

pub const PICKUP: &str = "Pickup";
pub const DROP: &str = "Drop";
pub const DRIVING: &str = "Driving";
pub const FUEL_STOP: &str = "Fuel Stop";
pub const BREAK: &str = "30m Break";
pub const DAILY_REST: &str = "Off Duty (reset)";
pub const RESTART: &str = "34h Restart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Driving,
    OnDutyNotDriving,
    OffDuty,
    Break,
    FuelStop,
    Restart,
}

/// What the log grid shows for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    Off,
    Driving,
    OnDuty,
}

impl From<EventKind> for DutyStatus {
    fn from(value: EventKind) -> Self {
        match value {
            EventKind::Driving => Self::Driving,
            EventKind::OnDutyNotDriving | EventKind::FuelStop => Self::OnDuty,
            EventKind::OffDuty | EventKind::Break | EventKind::Restart => Self::Off,
        }
    }
}

impl EventKind {
    pub fn status(&self) -> DutyStatus {
        (*self).into()
    }

    /// Events after which the daily clocks start over.
    pub fn is_qualifying_rest(&self) -> bool {
        matches!(self, EventKind::OffDuty | EventKind::Restart)
    }
}

/// One contiguous block of the duty log.
///
/// `duty_window` and `cycle_used` are the simulator's counters as they
/// stood when the event ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub label: &'static str,
    pub miles: f64,
    pub duty_window: Duration,
    pub cycle_used: Duration,
}

impl Event {
    pub fn duration(&self) -> Duration {
        Duration::between(self.start, self.end)
    }

    /// Window usage at `at`, an instant inside the event.
    /// The window is wall-clock time, so it grows with every non-rest event.
    pub fn duty_window_at(&self, at: DateTime<Utc>) -> Duration {
        if self.kind.is_qualifying_rest() {
            self.duty_window
        } else {
            self.duty_window
                .saturating_sub(Duration::between(at.min(self.end), self.end))
        }
    }
}
