use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    hos,
    shared::geo::{Coordinate, Distance},
};

/// Speed used whenever a route has to be estimated instead of routed.
pub const DEFAULT_SPEED_MPH: f64 = 50.0;
/// Assumed trip length when not even two points could be resolved.
pub const FALLBACK_DISTANCE: Distance = Distance::from_miles(500.0);

/// Distance and drive time of the whole trip (current -> pickup -> drop).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    #[serde(rename = "distance_mi")]
    pub distance_miles: f64,
    #[serde(rename = "duration_hr")]
    pub drive_duration_hours: f64,
    pub polyline: Option<String>,
}

impl RouteSummary {
    pub fn new(distance_miles: f64, drive_duration_hours: f64) -> Self {
        Self {
            distance_miles,
            drive_duration_hours,
            polyline: None,
        }
    }

    pub fn with_polyline(mut self, polyline: impl Into<String>) -> Self {
        self.polyline = Some(polyline.into());
        self
    }

    /// Distance to 0.1 mi and duration to 0.01 h, the precision routes are reported in.
    pub fn rounded(mut self) -> Self {
        self.distance_miles = round_to(self.distance_miles, 1);
        self.drive_duration_hours = round_to(self.drive_duration_hours, 2);
        self
    }

    /// Average speed over the whole route in miles per hour.
    /// A route with no distance has a speed of zero.
    pub fn average_speed(&self) -> Result<f64, hos::Error> {
        if !self.distance_miles.is_finite() || self.distance_miles < 0.0 {
            return Err(hos::Error::InvalidRoute(format!(
                "distance must be a finite, non-negative number of miles, got {}",
                self.distance_miles
            )));
        }
        if !self.drive_duration_hours.is_finite() || self.drive_duration_hours < 0.0 {
            return Err(hos::Error::InvalidRoute(format!(
                "drive duration must be a finite, non-negative number of hours, got {}",
                self.drive_duration_hours
            )));
        }
        if self.distance_miles == 0.0 {
            return Ok(0.0);
        }
        if self.drive_duration_hours <= 0.0 {
            return Err(hos::Error::InvalidRoute(format!(
                "a route of {} mi cannot take {} h",
                self.distance_miles, self.drive_duration_hours
            )));
        }
        Ok(self.distance_miles / self.drive_duration_hours)
    }
}

/// Route of a caller supplied length, driven at [`DEFAULT_SPEED_MPH`].
pub fn assumed(distance: Distance) -> RouteSummary {
    RouteSummary::new(distance.as_miles(), round_to(drive_minutes(distance) / 60.0, 2))
}

/// Geodesic estimate over the resolved waypoints, in order.
/// Unresolved waypoints are skipped; only consecutive resolved pairs count as legs.
pub fn estimate(points: &[Option<Coordinate>]) -> RouteSummary {
    let mut total: Distance = points
        .windows(2)
        .filter_map(|pair| match pair {
            [Some(a), Some(b)] => Some(a.haversine_distance(b)),
            _ => None,
        })
        .sum();
    if total.as_miles() == 0.0 {
        debug!("No legs could be estimated, assuming {} mi", FALLBACK_DISTANCE.as_miles());
        total = FALLBACK_DISTANCE;
    }
    RouteSummary::new(total.as_miles(), drive_minutes(total) / 60.0).rounded()
}

/// Whole minutes at [`DEFAULT_SPEED_MPH`], at least one for any distance.
fn drive_minutes(distance: Distance) -> f64 {
    let minutes = (distance.as_miles() / DEFAULT_SPEED_MPH * 60.0).round();
    if distance.as_miles() > 0.0 {
        minutes.max(1.0)
    } else {
        minutes
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
