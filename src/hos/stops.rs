use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hos::event::{self, Event, EventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    Pickup,
    Fuel,
    Drop,
}

impl StopType {
    fn of(event: &Event) -> Option<Self> {
        match (event.kind, event.label) {
            (EventKind::FuelStop, _) => Some(Self::Fuel),
            (EventKind::OnDutyNotDriving, event::PICKUP) => Some(Self::Pickup),
            (EventKind::OnDutyNotDriving, event::DROP) => Some(Self::Drop),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    #[serde(rename = "type")]
    pub stop_type: StopType,
    pub eta: DateTime<Utc>,
    #[serde(rename = "duration_min")]
    pub duration_minutes: u32,
}

/// The pickup, fuel and drop stops of a log, in log order.
pub fn extract_stops(events: &[Event]) -> Vec<Stop> {
    events
        .iter()
        .filter_map(|event| {
            StopType::of(event).map(|stop_type| Stop {
                stop_type,
                eta: event.start,
                duration_minutes: event.duration().as_minutes(),
            })
        })
        .collect()
}
