use std::ops::{Add, AddAssign, Sub};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 60 * 60;
const SECONDS_PER_DAY: u32 = 60 * 60 * 24;

/// A span of simulated time in whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Duration {
    pub const ZERO: Self = Self(0);

    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes * SECONDS_PER_MINUTE)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours * SECONDS_PER_HOUR)
    }

    /// Fractional hours rounded to the nearest second.
    /// Negative and NaN inputs become zero, huge inputs saturate.
    pub fn from_hours_f64(hours: f64) -> Self {
        Self((hours * SECONDS_PER_HOUR as f64).round() as u32)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0 / SECONDS_PER_MINUTE
    }

    pub fn as_hours(&self) -> f64 {
        self.0 as f64 / SECONDS_PER_HOUR as f64
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    pub fn as_time_delta(&self) -> TimeDelta {
        TimeDelta::seconds(self.0 as i64)
    }

    /// Whole seconds between two instants, zero when `to` is not after `from`.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        let secs = (to - from).num_seconds().clamp(0, u32::MAX as i64);
        Self(secs as u32)
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Addition saturates at `u32::MAX` seconds.
impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0)
    }
}

/// Seconds since local midnight. `86400` is the end of the day and renders as `24:00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u32);

impl From<u32> for TimeOfDay {
    fn from(value: u32) -> Self {
        Self(value.min(SECONDS_PER_DAY))
    }
}

impl Sub<TimeOfDay> for TimeOfDay {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration(self.0 - rhs.0)
    }
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(0);
    pub const END_OF_DAY: Self = Self(SECONDS_PER_DAY);

    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub fn to_hm_string(&self) -> String {
        let h = self.0 / SECONDS_PER_HOUR;
        let m = (self.0 % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        format!("{:02}:{:02}", h, m)
    }

    pub fn to_hms_string(&self) -> String {
        let h = self.0 / SECONDS_PER_HOUR;
        let m = (self.0 % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let s = self.0 % SECONDS_PER_MINUTE;
        format!("{:02}:{:02}:{:02}", h, m, s)
    }

    pub fn from_hms(time: &str) -> Option<Self> {
        let mut split = time.split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        let seconds: u32 = split.next()?.parse().ok()?;
        if split.next().is_some() {
            return None;
        }
        Self::checked(hours, minutes, seconds)
    }

    pub fn from_hm(time: &str) -> Option<Self> {
        let (hours, minutes) = time.split_once(':')?;
        Self::checked(hours.parse().ok()?, minutes.parse().ok()?, 0)
    }

    fn checked(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        if minutes >= 60 || seconds >= 60 {
            return None;
        }
        let total = hours as u64 * SECONDS_PER_HOUR as u64
            + (minutes * SECONDS_PER_MINUTE + seconds) as u64;
        (total <= SECONDS_PER_DAY as u64).then_some(Self(total as u32))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hm_string())
    }
}

/// The reference the plan is displayed in. Day boundaries and `HH:MM`
/// values are computed in this offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    offset: FixedOffset,
}

impl Default for Clock {
    fn default() -> Self {
        Self::utc()
    }
}

impl From<FixedOffset> for Clock {
    fn from(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock {
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    /// `None` when the offset is a day or more away from UTC.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(Self::from)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn date_of(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.with_timezone(&self.offset).date_naive()
    }

    /// UTC instant of local midnight starting `date`.
    pub fn midnight(&self, date: NaiveDate) -> DateTime<Utc> {
        let local = date.and_time(NaiveTime::MIN);
        local.and_utc() - TimeDelta::seconds(self.offset.local_minus_utc() as i64)
    }

    /// Time of day of `timestamp` relative to the start of `date`,
    /// clamped to `[00:00, 24:00]`.
    pub fn time_of_day(&self, timestamp: DateTime<Utc>, date: NaiveDate) -> TimeOfDay {
        Duration::between(self.midnight(date), timestamp)
            .as_seconds()
            .into()
    }

    /// 08:00 on the current local day, the default start of a plan.
    pub fn default_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.midnight(self.date_of(now)) + Duration::from_hours(8).as_time_delta()
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00:00";
    let stime = TimeOfDay::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_unparse_2() {
    let time = "12:30:30";
    let stime = TimeOfDay::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn end_of_day_renders_as_24() {
    assert_eq!(TimeOfDay::END_OF_DAY.to_hm_string(), "24:00");
    assert_eq!(TimeOfDay::from_hm("24:00"), Some(TimeOfDay::END_OF_DAY));
}

#[test]
fn invalid_time_test_1() {
    assert!(TimeOfDay::from_hms("00:00:0a").is_none())
}

#[test]
fn invalid_time_test_2() {
    assert!(TimeOfDay::from_hms("00:00").is_none())
}

#[test]
fn invalid_time_test_3() {
    assert!(TimeOfDay::from_hm("24:01").is_none());
    assert!(TimeOfDay::from_hm("10:60").is_none());
}

#[test]
fn fractional_hours_round_to_seconds() {
    assert_eq!(Duration::from_hours_f64(1.5).as_seconds(), 5400);
    assert_eq!(Duration::from_hours_f64(-2.0), Duration::ZERO);
    assert_eq!(Duration::from_hours_f64(0.5), Duration::from_minutes(30));
}

#[test]
fn addition_saturates() {
    let mut cycle = Duration::from_hours_f64(1_200_000.0);
    assert_eq!(cycle.as_seconds(), u32::MAX);
    cycle += Duration::from_hours(1);
    assert_eq!(cycle.as_seconds(), u32::MAX);
    assert_eq!(cycle + Duration::from_minutes(30), cycle);
}
