use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use haulplan::prelude::*;
use std::hint::black_box;

fn input(cycle_hours_used: f64) -> TripInput {
    TripInput {
        current_location: "Chicago, IL".into(),
        pickup_location: "Gary, IN".into(),
        drop_location: "Los Angeles, CA".into(),
        cycle_hours_used,
        start_time: Utc.with_ymd_and_hms(2025, 9, 14, 8, 0, 0).unwrap(),
    }
}

fn single_plan(input: &TripInput, route: &RouteSummary) {
    let _ = black_box(plan_trip(input, route));
}

fn batch_plan(requests: &[(TripInput, RouteSummary)]) {
    let _ = black_box(plan_many(requests));
}

fn bench_planner(c: &mut Criterion) {
    let short_input = input(10.0);
    let short_route = RouteSummary::new(240.0, 4.5);
    c.bench_function("short_plan", |b| {
        b.iter(|| single_plan(&short_input, &short_route))
    });

    let long_input = input(55.0);
    let long_route = RouteSummary::new(2_800.0, 46.0);
    c.bench_function("cross_country_plan", |b| {
        b.iter(|| single_plan(&long_input, &long_route))
    });

    let requests: Vec<_> = (0..256)
        .map(|i| {
            let distance = 100.0 + i as f64 * 25.0;
            (
                input((i % 70) as f64),
                RouteSummary::new(distance, distance / 52.0),
            )
        })
        .collect();
    c.bench_function("batch_plan_256", |b| b.iter(|| batch_plan(&requests)));
}

criterion_group!(benches, bench_planner);
criterion_main!(benches);
