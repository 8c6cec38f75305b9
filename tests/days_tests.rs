use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use haulplan::{
    hos::{self, DutyStatus, Event, Rules, group_days, merge_segments, simulate},
    route::RouteSummary,
    shared::{Clock, Duration, TimeOfDay},
};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 14, 8, 0, 0).unwrap()
}

fn reference_events() -> Vec<Event> {
    let route = RouteSummary::new(1234.5, 24.0);
    simulate(&route, start(), Duration::from_hours(42), &Rules::default()).unwrap()
}

fn hm(value: &str) -> TimeOfDay {
    TimeOfDay::from_hm(value).unwrap()
}

#[test]
fn reference_days_test() {
    let days = group_days(&reference_events(), &Clock::utc());
    assert_eq!(days.len(), 3);
    for (i, day) in days.iter().enumerate() {
        assert_eq!(day.index, i + 1);
    }
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 9, 14).unwrap());
    assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2025, 9, 16).unwrap());

    let first = &days[0];
    assert_eq!(first.segments[0].t0, hm("08:00"));
    assert_eq!(first.segments[0].status, DutyStatus::OnDuty);
    assert_eq!(first.segments[0].label, hos::PICKUP);
    let rest = &first.segments[first.segments.len() - 1];
    assert_eq!(rest.t0, hm("20:30"));
    assert_eq!(rest.t1, TimeOfDay::END_OF_DAY);
    assert_eq!(rest.status, DutyStatus::Off);
    assert_eq!(first.notes, "Day total: 11.0h driving; window used: 12.5h");

    let second = &days[1];
    assert_eq!(second.segments[0].t0, TimeOfDay::MIDNIGHT);
    assert_eq!(second.segments[0].t1, hm("06:30"));
    assert_eq!(second.segments[0].label, hos::DAILY_REST);
    assert_eq!(second.driving, Duration::from_hours(11));
    assert_eq!(second.window_used, Duration::from_hours(12));

    let third = &days[2];
    assert_eq!(third.notes, "Day total: 2.0h driving; window used: 3.0h");
    let drop = &third.segments[third.segments.len() - 1];
    assert_eq!(drop.label, hos::DROP);
    assert_eq!(drop.t0, hm("06:30"));
    assert_eq!(drop.t1, hm("07:30"));
}

#[test]
fn restart_spans_whole_day_test() {
    let route = RouteSummary::new(50.0, 1.0);
    let start = Utc.with_ymd_and_hms(2025, 9, 14, 20, 0, 0).unwrap();
    let events = simulate(&route, start, Duration::from_hours(69), &Rules::default()).unwrap();
    let days = group_days(&events, &Clock::utc());

    // 21:00 on day one to 07:00 on day three
    assert_eq!(days.len(), 3);
    let middle = &days[1];
    assert_eq!(middle.segments.len(), 1);
    assert_eq!(middle.segments[0].t0, TimeOfDay::MIDNIGHT);
    assert_eq!(middle.segments[0].t1, TimeOfDay::END_OF_DAY);
    assert_eq!(middle.segments[0].label, hos::RESTART);
    assert_eq!(middle.notes, "Day total: 0.0h driving; window used: 0.0h");
}

#[test]
fn segments_cover_elapsed_time_test() {
    let events = reference_events();
    let days = group_days(&events, &Clock::utc());
    let total = days
        .iter()
        .flat_map(|day| day.segments.iter())
        .fold(Duration::ZERO, |acc, segment| acc + segment.duration());
    let elapsed = Duration::between(events[0].start, events[events.len() - 1].end);
    assert_eq!(total, elapsed);

    for day in days.iter() {
        for segment in day.segments.iter() {
            assert!(segment.t0 < segment.t1);
        }
        for pair in day.segments.windows(2) {
            assert_eq!(pair[0].t1, pair[1].t0);
        }
    }
}

#[test]
fn merge_round_trip_test() {
    for (distance, hours, cycle) in [
        (1234.5, 24.0, 42.0),
        (50.0, 1.0, 69.0),
        (0.0, 0.0, 0.0),
        (2750.0, 50.0, 20.0),
        (5200.0, 80.0, 65.0),
    ] {
        let route = RouteSummary::new(distance, hours);
        let events = simulate(
            &route,
            start(),
            Duration::from_hours_f64(cycle),
            &Rules::default(),
        )
        .unwrap();
        let days = group_days(&events, &Clock::utc());
        let spans = merge_segments(&days);

        assert_eq!(spans.len(), events.len());
        for (span, event) in spans.iter().zip(events.iter()) {
            assert_eq!(span.duration, event.duration());
            assert_eq!(span.label, event.label);
            assert_eq!(span.status, event.kind.status());
        }
    }
}

#[test]
fn local_clock_test() {
    let clock = Clock::from_offset_minutes(-5 * 60).unwrap();
    let days = group_days(&reference_events(), &clock);
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 9, 14).unwrap());
    assert_eq!(days[0].segments[0].t0, hm("03:00"));
    // The first rest starts 15:30 local and runs past midnight
    let rest = days[0]
        .segments
        .iter()
        .find(|segment| segment.label == hos::DAILY_REST)
        .unwrap();
    assert_eq!(rest.t0, hm("15:30"));
    assert_eq!(rest.t1, TimeOfDay::END_OF_DAY);
}

#[test]
fn day_wire_shape_test() {
    let route = RouteSummary::new(0.0, 0.0);
    let events = simulate(&route, start(), Duration::ZERO, &Rules::default()).unwrap();
    let days = group_days(&events, &Clock::utc());
    let json = serde_json::to_value(&days[0]).unwrap();
    assert_eq!(json["index"], 1);
    assert_eq!(json["date"], "2025-09-14");
    assert_eq!(json["segments"][0]["t0"], "08:00");
    assert_eq!(json["segments"][0]["t1"], "09:00");
    assert_eq!(json["segments"][0]["status"], "on_duty");
    assert_eq!(json["segments"][1]["label"], "Drop");
    assert_eq!(json["notes"], "Day total: 0.0h driving; window used: 2.0h");
}
