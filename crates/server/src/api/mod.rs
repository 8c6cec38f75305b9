mod plan;

pub use plan::*;

use crate::dto::{FieldErrors, push};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use haulplan::hos;
use serde::Serialize;
use tracing::error;

pub async fn health() -> &'static str {
    "ok"
}

#[derive(Debug)]
pub enum ApiError {
    Validation(FieldErrors),
    InvalidRoute(String),
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<hos::Error> for ApiError {
    fn from(value: hos::Error) -> Self {
        match value {
            hos::Error::InvalidInput { field, message } => {
                let field = match field {
                    "cycle_hours_used" => "current_cycle_used_hours",
                    other => other,
                };
                let mut errors = FieldErrors::new();
                push(&mut errors, field, &message);
                Self::Validation(errors)
            }
            hos::Error::InvalidRoute(message) => Self::InvalidRoute(message),
            err => {
                error!("Planning failed: {err}");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            ApiError::InvalidRoute(error) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorBody { error })).into_response()
            }
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
