use haulplan::{
    hos::{EventKind, Planner},
    route::{self, DEFAULT_SPEED_MPH, RouteSummary},
    shared::{Coordinate, Distance},
};

#[test]
fn average_speed_test() {
    let route = RouteSummary::new(1234.5, 24.0);
    assert!((route.average_speed().unwrap() - 51.4375).abs() < 1e-9);
    assert_eq!(RouteSummary::new(0.0, 0.0).average_speed().unwrap(), 0.0);
    assert!(RouteSummary::new(10.0, 0.0).average_speed().is_err());
    assert!(RouteSummary::new(10.0, -1.0).average_speed().is_err());
    assert!(RouteSummary::new(f64::INFINITY, 1.0).average_speed().is_err());
}

#[test]
fn assumed_route_test() {
    let route = route::assumed(Distance::from_miles(125.0));
    assert_eq!(route.distance_miles, 125.0);
    assert_eq!(route.drive_duration_hours, 2.5);
    assert!(route.polyline.is_none());
}

#[test]
fn short_assumed_route_takes_a_minute_test() {
    let route = route::assumed(Distance::from_miles(0.2));
    assert_eq!(route.distance_miles, 0.2);
    assert_eq!(route.drive_duration_hours, 0.02);
    assert_eq!(route::assumed(Distance::from_miles(0.0)).drive_duration_hours, 0.0);
}

#[test]
fn short_estimated_route_is_plannable_test() {
    let a = Coordinate::from((41.8781, -87.6298));
    let b = Coordinate::from((41.8810, -87.6298));
    let route = route::estimate(&[Some(a), Some(b)]);
    assert_eq!(route.distance_miles, 0.2);
    assert!(route.drive_duration_hours > 0.0);

    let plan = Planner::new(&route).plan().unwrap();
    let kinds: Vec<_> = plan.events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![EventKind::OnDutyNotDriving, EventKind::Driving, EventKind::OnDutyNotDriving]
    );
    assert!((plan.events[1].miles - 0.2).abs() < 1e-9);
}

#[test]
fn estimate_test() {
    let chicago = Coordinate::from((41.8781, -87.6298));
    let indianapolis = Coordinate::from((39.7684, -86.1581));
    let leg = chicago.haversine_distance(&indianapolis).as_miles();
    assert!((leg - 165.0).abs() < 5.0);

    let route = route::estimate(&[Some(chicago), Some(indianapolis)]);
    assert!((route.distance_miles - leg).abs() <= 0.05);
    let expected_hours = (leg / DEFAULT_SPEED_MPH * 60.0).round() / 60.0;
    assert!((route.drive_duration_hours - expected_hours).abs() <= 0.005);
}

#[test]
fn estimate_skips_unresolved_points_test() {
    let a = Coordinate::from((41.8781, -87.6298));
    let b = Coordinate::from((39.7684, -86.1581));
    let route = route::estimate(&[None, Some(a), Some(b)]);
    let full = route::estimate(&[Some(a), Some(b)]);
    assert_eq!(route, full);
}

#[test]
fn estimate_fallback_test() {
    let route = route::estimate(&[None, Some(Coordinate::default()), None]);
    assert_eq!(route.distance_miles, 500.0);
    assert_eq!(route.drive_duration_hours, 10.0);
}

#[test]
fn haversine_zero_test() {
    let a = Coordinate::from((48.858, 2.3514));
    assert_eq!(a.haversine_distance(&a).as_miles(), 0.0);
}

#[test]
fn distance_eq_test() {
    let a = Distance::from_meters(1609.344);
    let b = Distance::from_miles(1.0);
    assert!((a.as_miles() - b.as_miles()).abs() < 1e-12);
    assert!(Distance::from_kilometers(2.0) > Distance::from_miles(1.0));
}

#[test]
fn route_wire_shape_test() {
    let route = RouteSummary::new(12.5, 0.25).with_polyline("_p~iF~ps|U");
    let json = serde_json::to_value(&route).unwrap();
    assert_eq!(json["distance_mi"], 12.5);
    assert_eq!(json["duration_hr"], 0.25);
    assert_eq!(json["polyline"], "_p~iF~ps|U");
}
