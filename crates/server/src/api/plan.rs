use crate::{
    api::ApiError,
    dto::{FieldErrors, PlanTripRequest, push},
    state::AppState,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use haulplan::{
    hos::{self, Planner, TripPlan},
    prelude::RouteSummary,
};
use std::sync::Arc;
use tracing::{error, info};

pub async fn plan_trip(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PlanTripRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let plan = build_plan(&state, payload).await?;
    Ok(Json(plan).into_response())
}

pub async fn plan_trip_csv(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PlanTripRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let plan = build_plan(&state, payload).await?;
    let mut buf: Vec<u8> = Vec::new();
    hos::write_csv(&plan.days, &mut buf).map_err(|err| {
        error!("Failed to write log: {err}");
        ApiError::Internal
    })?;
    Ok(([(CONTENT_TYPE, "text/csv")], buf).into_response())
}

async fn build_plan(
    state: &AppState,
    payload: Result<Json<PlanTripRequest>, JsonRejection>,
) -> Result<TripPlan, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        let mut errors = FieldErrors::new();
        push(&mut errors, "non_field_errors", &rejection.body_text());
        ApiError::Validation(errors)
    })?;
    let valid = request
        .validate(&state.config.clock, Utc::now())
        .map_err(ApiError::Validation)?;
    let trip = valid.trip;
    info!(
        "Planning {} -> {} -> {}",
        trip.current_location, trip.pickup_location, trip.drop_location
    );

    let route: RouteSummary = state
        .provider
        .summarize(
            &trip.current_location,
            &trip.pickup_location,
            &trip.drop_location,
            valid.assume_distance,
        )
        .await;

    let plan = Planner::new(&route)
        .starting_at(trip.start_time)
        .with_cycle_used(trip.cycle_hours_used)
        .with_clock(state.config.clock)
        .plan()?;
    Ok(plan)
}
