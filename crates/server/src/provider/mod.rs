mod nominatim;
mod ors;

use crate::config::Config;
use haulplan::{
    route::{self, RouteSummary},
    shared::{Coordinate, Distance},
};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Failures talking to the geocoding or directions services.
/// None of these reach the planner, the provider falls back to an estimate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid service url: {0}")]
    InvalidUrl(String),
    #[error("Service answered {0}")]
    Status(StatusCode),
    #[error("No place matches {0:?}")]
    NoMatch(String),
    #[error("Invalid coordinate in response: {0}")]
    InvalidCoordinate(String),
    #[error("Directions response has no routes")]
    EmptyRoute,
}

pub struct RouteProvider {
    client: reqwest::Client,
    ors_api_key: Option<String>,
    ors_url: String,
    nominatim_url: String,
    user_agent: String,
    geocode_timeout: Duration,
    directions_timeout: Duration,
}

impl RouteProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            ors_api_key: config.ors_api_key.clone(),
            ors_url: config.ors_url.clone(),
            nominatim_url: config.nominatim_url.clone(),
            user_agent: config.user_agent.clone(),
            geocode_timeout: config.geocode_timeout,
            directions_timeout: config.directions_timeout,
        }
    }

    /// Route current -> pickup -> drop.
    ///
    /// An assumed distance skips routing entirely. Otherwise the waypoints are
    /// geocoded and sent to the directions service; when that is not possible
    /// the route is estimated from the great-circle legs.
    pub async fn summarize(
        &self,
        current: &str,
        pickup: &str,
        drop: &str,
        assume_distance: Option<Distance>,
    ) -> RouteSummary {
        if let Some(distance) = assume_distance.filter(|distance| distance.as_miles() > 0.0) {
            info!("Using assumed distance of {} mi", distance.as_miles());
            return route::assumed(distance);
        }

        // Nominatim allows one request per second, so no fan out
        let mut points: Vec<Option<Coordinate>> = Vec::with_capacity(3);
        for query in [current, pickup, drop] {
            match self.geocode(query).await {
                Ok(coordinate) => points.push(Some(coordinate)),
                Err(err) => {
                    warn!("Failed to geocode {query:?}: {err}");
                    points.push(None);
                }
            }
        }

        if let Some(key) = &self.ors_api_key
            && let [Some(a), Some(b), Some(c)] = points.as_slice()
        {
            match self.directions(key, &[*a, *b, *c]).await {
                Ok(summary) => return summary,
                Err(err) => warn!("Directions failed, falling back to estimate: {err}"),
            }
        }

        let summary = route::estimate(&points);
        info!(
            "Estimated route of {} mi over {} h",
            summary.distance_miles, summary.drive_duration_hours
        );
        summary
    }
}
