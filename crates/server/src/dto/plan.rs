use chrono::{DateTime, Utc};
use haulplan::{
    prelude::TripInput,
    shared::{Clock, Distance},
};
use serde::Deserialize;
use std::collections::BTreeMap;

const REQUIRED: &str = "This field is required.";
const BLANK: &str = "This field may not be blank.";
const NEGATIVE: &str = "Ensure this value is greater than or equal to 0.";

/// Messages per request field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Default, Deserialize)]
pub struct PlanTripRequest {
    pub current_location: Option<String>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub current_cycle_used_hours: Option<f64>,
    pub assume_distance_mi: Option<f64>,
    pub start_time: Option<String>,
}

#[derive(Debug)]
pub struct ValidRequest {
    pub trip: TripInput,
    pub assume_distance: Option<Distance>,
}

impl PlanTripRequest {
    /// Checks every field and reports all problems at once.
    pub fn validate(self, clock: &Clock, now: DateTime<Utc>) -> Result<ValidRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let current_location = location(&mut errors, "current_location", self.current_location);
        let pickup_location = location(&mut errors, "pickup_location", self.pickup_location);
        let drop_location = location(&mut errors, "dropoff_location", self.dropoff_location);

        let cycle_hours_used = match self.current_cycle_used_hours {
            None => {
                push(&mut errors, "current_cycle_used_hours", REQUIRED);
                0.0
            }
            Some(hours) if !hours.is_finite() || hours < 0.0 => {
                push(&mut errors, "current_cycle_used_hours", NEGATIVE);
                0.0
            }
            Some(hours) => hours,
        };

        let assume_distance = match self.assume_distance_mi {
            Some(miles) if !miles.is_finite() || miles < 0.0 => {
                push(&mut errors, "assume_distance_mi", NEGATIVE);
                None
            }
            miles => miles.map(Distance::from_miles),
        };

        let start_time = match self.start_time.as_deref() {
            None => clock.default_start(now),
            Some(raw) => match DateTime::parse_from_rfc3339(raw) {
                Ok(start) => start.with_timezone(&Utc),
                Err(_) => {
                    push(
                        &mut errors,
                        "start_time",
                        "Datetime has wrong format. Use ISO 8601, e.g. 2025-09-14T08:00:00Z.",
                    );
                    now
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ValidRequest {
            trip: TripInput {
                current_location,
                pickup_location,
                drop_location,
                cycle_hours_used,
                start_time,
            },
            assume_distance,
        })
    }
}

fn location(errors: &mut FieldErrors, field: &str, value: Option<String>) -> String {
    match value {
        None => {
            push(errors, field, REQUIRED);
            String::new()
        }
        Some(value) if value.trim().is_empty() => {
            push(errors, field, BLANK);
            String::new()
        }
        Some(value) => value.trim().to_string(),
    }
}

pub fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

#[cfg(test)]
fn request() -> PlanTripRequest {
    PlanTripRequest {
        current_location: Some("Chicago, IL".into()),
        pickup_location: Some("Gary, IN".into()),
        dropoff_location: Some("Denver, CO".into()),
        current_cycle_used_hours: Some(12.5),
        ..Default::default()
    }
}

#[cfg(test)]
fn now() -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(2025, 9, 14, 5, 30, 0).unwrap()
}

#[test]
fn valid_request_test() {
    let valid = request().validate(&Clock::utc(), now()).unwrap();
    assert_eq!(valid.trip.cycle_hours_used, 12.5);
    assert_eq!(valid.trip.drop_location, "Denver, CO");
    assert_eq!(valid.trip.start_time.to_rfc3339(), "2025-09-14T08:00:00+00:00");
    assert!(valid.assume_distance.is_none());
}

#[test]
fn explicit_start_test() {
    let valid = PlanTripRequest {
        start_time: Some("2025-09-14T10:00:00-05:00".into()),
        assume_distance_mi: Some(320.0),
        ..request()
    }
    .validate(&Clock::utc(), now())
    .unwrap();
    assert_eq!(valid.trip.start_time.to_rfc3339(), "2025-09-14T15:00:00+00:00");
    assert_eq!(valid.assume_distance.map(|d| d.as_miles()), Some(320.0));
}

#[test]
fn field_errors_test() {
    let errors = PlanTripRequest {
        current_location: None,
        pickup_location: Some("   ".into()),
        current_cycle_used_hours: Some(-3.0),
        assume_distance_mi: Some(-1.0),
        start_time: Some("yesterday".into()),
        ..request()
    }
    .validate(&Clock::utc(), now())
    .unwrap_err();
    assert_eq!(errors["current_location"], vec![REQUIRED.to_string()]);
    assert_eq!(errors["pickup_location"], vec![BLANK.to_string()]);
    assert_eq!(errors["current_cycle_used_hours"], vec![NEGATIVE.to_string()]);
    assert_eq!(errors["assume_distance_mi"], vec![NEGATIVE.to_string()]);
    assert!(errors.contains_key("start_time"));
    assert!(!errors.contains_key("dropoff_location"));
}

#[test]
fn missing_cycle_test() {
    let errors = PlanTripRequest {
        current_cycle_used_hours: None,
        ..request()
    }
    .validate(&Clock::utc(), now())
    .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["current_cycle_used_hours"], vec![REQUIRED.to_string()]);
}
