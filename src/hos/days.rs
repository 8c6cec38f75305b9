use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

use crate::{
    hos::event::{DutyStatus, Event},
    shared::time::{Clock, Duration, TimeOfDay},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySegment {
    pub t0: TimeOfDay,
    pub t1: TimeOfDay,
    pub status: DutyStatus,
    pub label: &'static str,
}

impl DaySegment {
    pub fn duration(&self) -> Duration {
        self.t1 - self.t0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Day {
    pub index: usize,
    pub date: NaiveDate,
    pub segments: Vec<DaySegment>,
    #[serde(skip)]
    pub driving: Duration,
    #[serde(skip)]
    pub window_used: Duration,
    pub notes: String,
}

impl Day {
    fn new(index: usize, date: NaiveDate) -> Self {
        Self {
            index,
            date,
            segments: Vec::new(),
            driving: Duration::ZERO,
            window_used: Duration::ZERO,
            notes: String::new(),
        }
    }
}

/// Splits the log into calendar days of `clock`.
///
/// An event that runs over midnight shows up as one segment on each day
/// it touches. Day notes come from the counters recorded on the events.
pub fn group_days(events: &[Event], clock: &Clock) -> Vec<Day> {
    let mut days: Vec<Day> = Vec::new();

    for event in events {
        let mut cursor = event.start;
        while cursor < event.end {
            let date = clock.date_of(cursor);
            let next_midnight = clock.midnight(date) + TimeDelta::days(1);
            let clip_end = event.end.min(next_midnight);

            if days.last().is_none_or(|day| day.date != date) {
                days.push(Day::new(days.len() + 1, date));
            }
            // Pushed above when missing
            let Some(day) = days.last_mut() else {
                break;
            };

            let segment = DaySegment {
                t0: clock.time_of_day(cursor, date),
                t1: clock.time_of_day(clip_end, date),
                status: event.kind.status(),
                label: event.label,
            };
            if segment.status == DutyStatus::Driving {
                day.driving += segment.duration();
            }
            day.window_used = day.window_used.max(event.duty_window_at(clip_end));
            day.segments.push(segment);
            cursor = clip_end;
        }
    }

    for day in days.iter_mut() {
        day.notes = format!(
            "Day total: {:.1}h driving; window used: {:.1}h",
            day.driving.as_hours(),
            day.window_used.as_hours()
        );
    }
    days
}

/// A run of the log as it was before day clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub status: DutyStatus,
    pub label: &'static str,
    pub duration: Duration,
}

/// Rejoins segments that were split at midnight.
/// A segment ending at `24:00` continues into the next day's `00:00`
/// segment when both carry the same status and label.
pub fn merge_segments(days: &[Day]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut open = false;

    for day in days {
        for segment in &day.segments {
            let continues = open
                && segment.t0 == TimeOfDay::MIDNIGHT
                && spans.last().is_some_and(|span| {
                    span.status == segment.status && span.label == segment.label
                });
            match spans.last_mut() {
                Some(span) if continues => span.duration += segment.duration(),
                _ => spans.push(Span {
                    status: segment.status,
                    label: segment.label,
                    duration: segment.duration(),
                }),
            }
            open = segment.t1 == TimeOfDay::END_OF_DAY;
        }
    }
    spans
}
