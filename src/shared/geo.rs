use std::{cmp, fmt::Display, iter::Sum};

use serde::{Deserialize, Serialize};

pub(crate) const EARTH_RADIUS: Distance = Distance::from_miles(3958.7613);
const METERS_PER_MILE: f64 = 1609.344;

#[derive(Debug, Clone, Copy, Default)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|distance| distance.0).sum())
    }
}

impl Distance {
    pub const fn from_miles(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_meters(distance: f64) -> Self {
        Self(distance / METERS_PER_MILE)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0 / METERS_PER_MILE)
    }

    pub const fn as_miles(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl Coordinate {
    /// Great-circle distance.
    pub fn haversine_distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let h = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::powi(f64::sin(dist_lon / 2.0), 2);
        Distance::from_miles(2.0 * EARTH_RADIUS.as_miles() * f64::asin(f64::sqrt(h)))
    }
}
