use crate::{config::Config, provider::RouteProvider};

pub struct AppState {
    pub config: Config,
    pub provider: RouteProvider,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let provider = RouteProvider::new(&config);
        Self { config, provider }
    }
}
