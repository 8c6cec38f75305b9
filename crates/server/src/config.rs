use haulplan::shared::Clock;
use std::{env, str::FromStr, time::Duration};
use tracing::warn;

pub struct Config {
    pub port: u16,
    pub ors_api_key: Option<String>,
    pub ors_url: String,
    pub nominatim_url: String,
    pub user_agent: String,
    pub clock: Clock,
    pub geocode_timeout: Duration,
    pub directions_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            ors_api_key: None,
            ors_url: "https://api.openrouteservice.org".into(),
            nominatim_url: "https://nominatim.openstreetmap.org".into(),
            user_agent: "haulplan/0.1".into(),
            clock: Clock::utc(),
            geocode_timeout: Duration::from_secs(15),
            directions_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Defaults overridden by whatever is set in the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = parse_var("PORT") {
            config.port = port;
        }
        config.ors_api_key = env::var("ORS_API_KEY").ok().filter(|key| !key.is_empty());
        if let Ok(url) = env::var("ORS_URL") {
            config.ors_url = url;
        }
        if let Ok(url) = env::var("NOMINATIM_URL") {
            config.nominatim_url = url;
        }
        if let Some(minutes) = parse_var::<i32>("UTC_OFFSET_MINUTES") {
            match Clock::from_offset_minutes(minutes) {
                Some(clock) => config.clock = clock,
                None => warn!("UTC_OFFSET_MINUTES={minutes} is out of range, using UTC"),
            }
        }
        if let Some(secs) = parse_var("GEOCODE_TIMEOUT_SECS") {
            config.geocode_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var("DIRECTIONS_TIMEOUT_SECS") {
            config.directions_timeout = Duration::from_secs(secs);
        }
        config
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let value = env::var(name).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {name}={value}, could not parse it");
            None
        }
    }
}
