pub mod days;
pub mod event;
pub mod export;
pub mod planner;
pub mod rules;
pub mod simulator;
pub mod stops;

pub use days::*;
pub use event::*;
pub use export::*;
pub use planner::*;
pub use rules::*;
pub use simulator::*;
pub use stops::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
