pub mod hos;
pub mod route;
pub mod shared;

pub mod prelude {
    pub use crate::hos::{
        Day, DaySegment, DutyStatus, Error, Event, EventKind, Planner, Rules, Stop, StopType,
        TripInput, TripPlan, plan_many, plan_trip,
    };
    pub use crate::route::RouteSummary;
    pub use crate::shared::{Clock, Coordinate, Distance, Duration, TimeOfDay};
}
