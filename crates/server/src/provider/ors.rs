use crate::provider::{self, RouteProvider};
use haulplan::{
    route::RouteSummary,
    shared::{Coordinate, Distance},
};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(Debug, Serialize)]
struct DirectionsRequest {
    /// `[longitude, latitude]` pairs.
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Default, Deserialize)]
struct Summary {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    summary: Summary,
    /// An encoded polyline unless another geometry format was requested.
    geometry: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    #[serde(default)]
    summary: Summary,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
}

/// Plain JSON answers carry `routes`, GeoJSON answers carry `features`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<Route>,
    #[serde(default)]
    features: Vec<Feature>,
}

impl TryFrom<DirectionsResponse> for RouteSummary {
    type Error = provider::Error;

    fn try_from(value: DirectionsResponse) -> Result<Self, Self::Error> {
        let (summary, polyline) = if let Some(route) = value.routes.into_iter().next() {
            let polyline = route
                .geometry
                .as_ref()
                .and_then(|geometry| geometry.as_str())
                .map(str::to_string);
            (route.summary, polyline)
        } else if let Some(feature) = value.features.into_iter().next() {
            (feature.properties.summary, None)
        } else {
            return Err(provider::Error::EmptyRoute);
        };

        let distance = Distance::from_meters(summary.distance);
        let summary = RouteSummary::new(distance.as_miles(), summary.duration / 3600.0).rounded();
        Ok(match polyline {
            Some(polyline) => summary.with_polyline(polyline),
            None => summary,
        })
    }
}

impl RouteProvider {
    pub(crate) async fn directions(
        &self,
        key: &str,
        points: &[Coordinate],
    ) -> Result<RouteSummary, provider::Error> {
        let body = DirectionsRequest {
            coordinates: points
                .iter()
                .map(|point| [point.longitude, point.latitude])
                .collect(),
        };
        let response = self
            .client
            .post(format!("{}/v2/directions/driving-car", self.ors_url))
            .header(AUTHORIZATION, key)
            .header(ACCEPT, "application/json")
            .json(&body)
            .timeout(self.directions_timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Directions answered {status}: {body}");
            return Err(provider::Error::Status(status));
        }

        let directions: DirectionsResponse = response.json().await?;
        let summary = RouteSummary::try_from(directions)?;
        debug!(
            "Directions: {} mi, {} h, polyline: {}",
            summary.distance_miles,
            summary.drive_duration_hours,
            summary.polyline.is_some()
        );
        Ok(summary)
    }
}

#[test]
fn json_routes_test() {
    let response: DirectionsResponse = serde_json::from_str(
        r#"{"routes": [{"summary": {"distance": 160934.4, "duration": 7200.0},
            "segments": [{"duration": 1800.0}], "geometry": "abc"}]}"#,
    )
    .unwrap();
    let summary = RouteSummary::try_from(response).unwrap();
    assert_eq!(summary.distance_miles, 100.0);
    assert_eq!(summary.drive_duration_hours, 2.0);
    assert_eq!(summary.polyline.as_deref(), Some("abc"));
}

#[test]
fn geojson_features_test() {
    let response: DirectionsResponse = serde_json::from_str(
        r#"{"type": "FeatureCollection", "features": [{"properties": {"summary":
            {"distance": 16093.44, "duration": 900.0}}, "geometry": {"coordinates": []}}]}"#,
    )
    .unwrap();
    let summary = RouteSummary::try_from(response).unwrap();
    assert_eq!(summary.distance_miles, 10.0);
    assert_eq!(summary.drive_duration_hours, 0.25);
    assert!(summary.polyline.is_none());
}

#[test]
fn error_body_test() {
    let response: DirectionsResponse =
        serde_json::from_str(r#"{"error": {"code": 2010, "message": "no route"}}"#).unwrap();
    assert!(matches!(
        RouteSummary::try_from(response),
        Err(provider::Error::EmptyRoute)
    ));
}
