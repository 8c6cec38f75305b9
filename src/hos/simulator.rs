use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    hos::{
        Error, Rules,
        event::{self, Event, EventKind},
    },
    route::RouteSummary,
    shared::time::Duration,
};

/// Distances closer than this are treated as equal.
pub(crate) const MILE_EPSILON: f64 = 1e-6;

/// The counters a simulation carries from one step to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub now: DateTime<Utc>,
    pub miles_remaining: f64,
    pub miles_since_fuel: f64,
    pub driving_today: Duration,
    pub duty_window: Duration,
    pub driving_since_break: Duration,
    pub cycle_used: Duration,
}

impl State {
    pub fn new(start: DateTime<Utc>, distance_miles: f64, cycle_used: Duration) -> Self {
        Self {
            now: start,
            miles_remaining: distance_miles,
            miles_since_fuel: 0.0,
            driving_today: Duration::ZERO,
            duty_window: Duration::ZERO,
            driving_since_break: Duration::ZERO,
            cycle_used,
        }
    }

    pub fn needs_fuel(&self, rules: &Rules) -> bool {
        self.miles_remaining > 0.0
            && self.miles_since_fuel >= rules.fuel_interval_miles - MILE_EPSILON
    }
}

/// The actions competing for the next slot of the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Restart,
    DailyRest,
    Break,
    Drive,
}

/// Guards are evaluated in this order and the first match wins.
pub const PRIORITY: [Step; 4] = [Step::Restart, Step::DailyRest, Step::Break, Step::Drive];

impl Step {
    pub fn applies(&self, state: &State, rules: &Rules) -> bool {
        match self {
            Step::Restart => state.cycle_used >= rules.cycle_limit,
            Step::DailyRest => {
                state.driving_today >= rules.daily_driving
                    || state.duty_window >= rules.duty_window
            }
            Step::Break => state.driving_since_break >= rules.break_after,
            Step::Drive => true,
        }
    }
}

pub fn next_step(state: &State, rules: &Rules) -> Step {
    PRIORITY
        .into_iter()
        .find(|step| step.applies(state, rules))
        .unwrap_or(Step::Drive)
}

pub struct Simulator<'a> {
    rules: &'a Rules,
    speed: f64,
    state: State,
    events: Vec<Event>,
}

impl<'a> Simulator<'a> {
    pub fn new(
        route: &RouteSummary,
        start: DateTime<Utc>,
        cycle_used: Duration,
        rules: &'a Rules,
    ) -> Result<Self, Error> {
        let speed = route.average_speed()?;
        rules.validate()?;
        Ok(Self {
            rules,
            speed,
            state: State::new(start, route.distance_miles, cycle_used),
            events: Vec::new(),
        })
    }

    /// Walks the trip from pickup to drop and returns the full log.
    pub fn run(mut self) -> Vec<Event> {
        self.on_duty(EventKind::OnDutyNotDriving, event::PICKUP, self.rules.pickup);

        while self.state.miles_remaining > 0.0 {
            match next_step(&self.state, self.rules) {
                Step::Restart => self.restart(),
                Step::DailyRest => self.daily_rest(),
                Step::Break => self.take_break(),
                Step::Drive => {
                    self.drive();
                    if self.state.needs_fuel(self.rules) {
                        self.refuel();
                    }
                }
            }
        }

        self.on_duty(EventKind::OnDutyNotDriving, event::DROP, self.rules.drop);
        info!(
            "Planned {} events ending {} with {:.1}h of cycle used",
            self.events.len(),
            self.state.now,
            self.state.cycle_used.as_hours()
        );
        self.events
    }

    fn restart(&mut self) {
        debug!("Cycle exhausted at {}, inserting restart", self.state.now);
        self.state.cycle_used = Duration::ZERO;
        self.reset_daily_clocks();
        self.push(EventKind::Restart, event::RESTART, self.rules.restart, 0.0);
    }

    fn daily_rest(&mut self) {
        debug!(
            "Daily limits reached at {} ({:.2}h driving, {:.2}h window)",
            self.state.now,
            self.state.driving_today.as_hours(),
            self.state.duty_window.as_hours()
        );
        self.reset_daily_clocks();
        self.push(EventKind::OffDuty, event::DAILY_REST, self.rules.daily_rest, 0.0);
    }

    fn take_break(&mut self) {
        debug!("Break due at {}", self.state.now);
        self.state.driving_since_break = Duration::ZERO;
        self.state.duty_window += self.rules.break_length;
        self.push(EventKind::Break, event::BREAK, self.rules.break_length, 0.0);
    }

    fn refuel(&mut self) {
        debug!("Fuel stop at {}", self.state.now);
        self.state.miles_since_fuel = 0.0;
        self.on_duty(EventKind::FuelStop, event::FUEL_STOP, self.rules.fuel_stop);
    }

    fn drive(&mut self) {
        let rules = self.rules;
        let state = &self.state;

        let to_fuel = (rules.fuel_interval_miles - state.miles_since_fuel).max(0.0);
        let distance_cap = state.miles_remaining.min(to_fuel);
        let time_cap = [
            rules.daily_driving.saturating_sub(state.driving_today),
            rules.duty_window.saturating_sub(state.duty_window),
            rules.break_after.saturating_sub(state.driving_since_break),
            rules.cycle_limit.saturating_sub(state.cycle_used),
        ]
        .into_iter()
        .min()
        .unwrap_or(Duration::ZERO);

        let distance_time =
            Duration::from_hours_f64(distance_cap / self.speed).max(Duration::from_seconds(1));
        let (duration, miles) = if distance_time <= time_cap {
            (distance_time, distance_cap)
        } else {
            (time_cap, (time_cap.as_hours() * self.speed).min(distance_cap))
        };

        self.state.miles_remaining -= miles;
        if self.state.miles_remaining <= MILE_EPSILON {
            self.state.miles_remaining = 0.0;
        }
        self.state.miles_since_fuel += miles;
        self.state.driving_today += duration;
        self.state.driving_since_break += duration;
        self.state.duty_window += duration;
        self.state.cycle_used += duration;
        self.push(EventKind::Driving, event::DRIVING, duration, miles);
    }

    fn on_duty(&mut self, kind: EventKind, label: &'static str, duration: Duration) {
        self.state.duty_window += duration;
        self.state.cycle_used += duration;
        self.push(kind, label, duration, 0.0);
    }

    fn reset_daily_clocks(&mut self) {
        self.state.driving_today = Duration::ZERO;
        self.state.duty_window = Duration::ZERO;
        self.state.driving_since_break = Duration::ZERO;
    }

    fn push(&mut self, kind: EventKind, label: &'static str, duration: Duration, miles: f64) {
        let start = self.state.now;
        let end = start + duration.as_time_delta();
        self.state.now = end;
        self.events.push(Event {
            kind,
            start,
            end,
            label,
            miles,
            duty_window: self.state.duty_window,
            cycle_used: self.state.cycle_used,
        });
    }
}

/// Runs one simulation with its own state.
pub fn simulate(
    route: &RouteSummary,
    start: DateTime<Utc>,
    cycle_used: Duration,
    rules: &Rules,
) -> Result<Vec<Event>, Error> {
    Ok(Simulator::new(route, start, cycle_used, rules)?.run())
}
