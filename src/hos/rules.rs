use crate::{hos::Error, shared::time::Duration};

/// Limits and fixed block lengths the simulator plans under.
///
/// The default is the simplified U.S. property-carrying ruleset:
/// 11 hours driving inside a 14 hour window, a 30 minute break after
/// 8 hours of driving, 10 hours of rest between windows and a
/// 70 hour / 8 day cycle cleared by a 34 hour restart.
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub duty_window: Duration,
    pub daily_driving: Duration,
    pub break_after: Duration,
    pub break_length: Duration,
    pub daily_rest: Duration,
    pub cycle_limit: Duration,
    pub restart: Duration,
    pub pickup: Duration,
    pub drop: Duration,
    pub fuel_interval_miles: f64,
    pub fuel_stop: Duration,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            duty_window: Duration::from_hours(14),
            daily_driving: Duration::from_hours(11),
            break_after: Duration::from_hours(8),
            break_length: Duration::from_minutes(30),
            daily_rest: Duration::from_hours(10),
            cycle_limit: Duration::from_hours(70),
            restart: Duration::from_hours(34),
            pickup: Duration::from_hours(1),
            drop: Duration::from_hours(1),
            fuel_interval_miles: 1000.0,
            fuel_stop: Duration::from_minutes(30),
        }
    }
}

impl Rules {
    /// Every limit and block must be positive, otherwise the simulation
    /// could not make progress.
    pub fn validate(&self) -> Result<(), Error> {
        let durations = [
            ("rules.duty_window", self.duty_window),
            ("rules.daily_driving", self.daily_driving),
            ("rules.break_after", self.break_after),
            ("rules.break_length", self.break_length),
            ("rules.daily_rest", self.daily_rest),
            ("rules.cycle_limit", self.cycle_limit),
            ("rules.restart", self.restart),
            ("rules.pickup", self.pickup),
            ("rules.drop", self.drop),
            ("rules.fuel_stop", self.fuel_stop),
        ];
        if let Some((field, _)) = durations.iter().find(|(_, value)| value.is_zero()) {
            return Err(Error::invalid_input(*field, "must be longer than zero"));
        }
        if !self.fuel_interval_miles.is_finite() || self.fuel_interval_miles <= 0.0 {
            return Err(Error::invalid_input(
                "rules.fuel_interval_miles",
                "must be a positive number of miles",
            ));
        }
        Ok(())
    }
}
