use crate::provider::{self, RouteProvider};
use haulplan::shared::Coordinate;
use reqwest::{Url, header::USER_AGENT};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct Place {
    lat: String,
    lon: String,
}

impl TryFrom<&Place> for Coordinate {
    type Error = provider::Error;

    fn try_from(value: &Place) -> Result<Self, Self::Error> {
        let parse = |raw: &str| {
            raw.parse::<f64>()
                .map_err(|_| provider::Error::InvalidCoordinate(raw.to_string()))
        };
        Ok(Coordinate {
            latitude: parse(&value.lat)?,
            longitude: parse(&value.lon)?,
        })
    }
}

impl RouteProvider {
    pub(crate) async fn geocode(&self, query: &str) -> Result<Coordinate, provider::Error> {
        let url = Url::parse_with_params(
            &format!("{}/search", self.nominatim_url),
            &[("format", "json"), ("q", query)],
        )
        .map_err(|err| provider::Error::InvalidUrl(err.to_string()))?;
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .timeout(self.geocode_timeout)
            .send()
            .await?;
        debug!("Geocode {query:?} answered {}", response.status());
        if !response.status().is_success() {
            return Err(provider::Error::Status(response.status()));
        }

        let places: Vec<Place> = response.json().await?;
        let place = places
            .first()
            .ok_or_else(|| provider::Error::NoMatch(query.to_string()))?;
        Coordinate::try_from(place)
    }
}

#[test]
fn place_test() {
    let places: Vec<Place> =
        serde_json::from_str(r#"[{"lat": "41.8755616", "lon": "-87.6244212", "name": "Chicago"}]"#)
            .unwrap();
    let coordinate = Coordinate::try_from(&places[0]).unwrap();
    assert_eq!(coordinate.latitude, 41.8755616);
    assert_eq!(coordinate.longitude, -87.6244212);
}

#[test]
fn bad_place_test() {
    let place = Place {
        lat: "north".into(),
        lon: "0".into(),
    };
    assert!(Coordinate::try_from(&place).is_err());
}
