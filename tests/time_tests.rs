use chrono::{NaiveDate, TimeZone, Utc};
use haulplan::shared::{Clock, Duration, TimeOfDay};

#[test]
fn valid_time_test_1() {
    assert_eq!(TimeOfDay::from_hms("00:00:00").unwrap().as_seconds(), 0);
}

#[test]
fn valid_time_test_2() {
    assert_eq!(TimeOfDay::from_hms("01:01:30").unwrap().as_seconds(), 3690);
}

#[test]
fn valid_time_test_3() {
    assert_eq!(TimeOfDay::from_hm("15:26").unwrap().to_hm_string(), "15:26");
}

#[test]
fn invalid_time_test_1() {
    assert!(TimeOfDay::from_hm("1526").is_none())
}

#[test]
fn invalid_time_test_2() {
    assert!(TimeOfDay::from_hms("99999999:00:00").is_none())
}

#[test]
fn hm_truncates_seconds_test() {
    assert_eq!(TimeOfDay::from_seconds(55_588).to_hm_string(), "15:26");
}

#[test]
fn duration_test() {
    let a = Duration::from_hours(2);
    let b = Duration::from_minutes(90);
    assert_eq!((a - b).as_minutes(), 30);
    assert_eq!(b.saturating_sub(a), Duration::ZERO);
    assert_eq!((a + b).as_hours(), 3.5);
    assert_eq!(a.as_time_delta(), chrono::TimeDelta::hours(2));
}

#[test]
fn between_test() {
    let a = Utc.with_ymd_and_hms(2025, 9, 14, 8, 0, 0).unwrap();
    let b = Utc.with_ymd_and_hms(2025, 9, 14, 9, 30, 0).unwrap();
    assert_eq!(Duration::between(a, b), Duration::from_minutes(90));
    assert_eq!(Duration::between(b, a), Duration::ZERO);
}

#[test]
fn clock_utc_test() {
    let clock = Clock::utc();
    let date = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();
    assert_eq!(
        clock.midnight(date),
        Utc.with_ymd_and_hms(2025, 9, 14, 0, 0, 0).unwrap()
    );
    let ts = Utc.with_ymd_and_hms(2025, 9, 14, 13, 45, 0).unwrap();
    assert_eq!(clock.date_of(ts), date);
    assert_eq!(clock.time_of_day(ts, date).to_hm_string(), "13:45");
}

#[test]
fn clock_offset_test() {
    let clock = Clock::from_offset_minutes(-6 * 60).unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();
    assert_eq!(
        clock.midnight(date),
        Utc.with_ymd_and_hms(2025, 9, 14, 6, 0, 0).unwrap()
    );
    let ts = Utc.with_ymd_and_hms(2025, 9, 15, 3, 0, 0).unwrap();
    assert_eq!(clock.date_of(ts), date);
    assert_eq!(clock.time_of_day(ts, date).to_hm_string(), "21:00");
    assert!(Clock::from_offset_minutes(24 * 60).is_none());
}

#[test]
fn default_start_test() {
    let now = Utc.with_ymd_and_hms(2025, 9, 14, 23, 10, 0).unwrap();
    assert_eq!(
        Clock::utc().default_start(now),
        Utc.with_ymd_and_hms(2025, 9, 14, 8, 0, 0).unwrap()
    );
    let east = Clock::from_offset_minutes(120).unwrap();
    assert_eq!(
        east.default_start(now),
        Utc.with_ymd_and_hms(2025, 9, 15, 6, 0, 0).unwrap()
    );
}
