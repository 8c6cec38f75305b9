mod api;
mod config;
mod dto;
mod provider;
mod state;

use crate::{config::Config, state::AppState};
use axum::routing::{get, post};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = Config::from_env();
    let port = config.port;
    if config.ors_api_key.is_none() {
        info!("ORS_API_KEY not set, routes will be estimated");
    }
    let state = Arc::new(AppState::new(config));

    let app = axum::Router::new()
        .route("/health", get(api::health))
        .route("/api/plan-trip", post(api::plan_trip))
        .route("/api/plan-trip/log.csv", post(api::plan_trip_csv))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {port}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {port}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
