use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::{
    hos::{
        Error, Rules,
        days::{Day, group_days},
        event::Event,
        simulator::simulate,
        stops::{Stop, extract_stops},
    },
    route::RouteSummary,
    shared::time::{Clock, Duration},
};

#[derive(Debug, Clone, PartialEq)]
pub struct TripInput {
    pub current_location: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub cycle_hours_used: f64,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripPlan {
    pub route: RouteSummary,
    #[serde(skip)]
    pub events: Vec<Event>,
    pub stops: Vec<Stop>,
    pub days: Vec<Day>,
}

pub struct Planner<'a> {
    route: &'a RouteSummary,
    start: DateTime<Utc>,
    cycle_hours_used: f64,
    rules: Rules,
    clock: Clock,
}

impl<'a> Planner<'a> {
    pub fn new(route: &'a RouteSummary) -> Self {
        let clock = Clock::default();
        Self {
            route,
            start: clock.default_start(Utc::now()),
            cycle_hours_used: 0.0,
            rules: Rules::default(),
            clock,
        }
    }

    pub fn starting_at(mut self, start: DateTime<Utc>) -> Self {
        self.start = start;
        self
    }

    pub fn with_cycle_used(mut self, hours: f64) -> Self {
        self.cycle_hours_used = hours;
        self
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn plan(self) -> Result<TripPlan, Error> {
        if !self.cycle_hours_used.is_finite() || self.cycle_hours_used < 0.0 {
            return Err(Error::invalid_input(
                "cycle_hours_used",
                format!("must be at least 0, got {}", self.cycle_hours_used),
            ));
        }
        let cycle_used = Duration::from_hours_f64(self.cycle_hours_used);
        let events = simulate(self.route, self.start, cycle_used, &self.rules)?;
        let stops = extract_stops(&events);
        let days = group_days(&events, &self.clock);
        info!(
            "Trip of {:.1} mi planned over {} day(s) with {} stop(s)",
            self.route.distance_miles,
            days.len(),
            stops.len()
        );
        Ok(TripPlan {
            route: self.route.clone(),
            events,
            stops,
            days,
        })
    }
}

/// Plans one trip under the default rules in UTC.
pub fn plan_trip(input: &TripInput, route: &RouteSummary) -> Result<TripPlan, Error> {
    Planner::new(route)
        .starting_at(input.start_time)
        .with_cycle_used(input.cycle_hours_used)
        .plan()
}

/// Plans independent trips in parallel. Results keep the order of `requests`.
pub fn plan_many(requests: &[(TripInput, RouteSummary)]) -> Vec<Result<TripPlan, Error>> {
    requests
        .par_iter()
        .map(|(input, route)| plan_trip(input, route))
        .collect()
}
