use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Client input that was well routed but cannot be accepted.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required text field is empty or only whitespace.
    #[error("Field `{0}` must not be empty")]
    EmptyField(&'static str),
    /// A statistics counter is below zero.
    #[error("Field `{field}` must not be negative, got {value}")]
    NegativeValue {
        /// Name of the offending field
        field: &'static str,
        /// Rejected value
        value: i32,
    },
    /// A match was scheduled with the same club on both sides.
    #[error("Home and away club must differ, got club ID {0} for both")]
    SameClub(i32),
    /// The request body could not be parsed into the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// A path parameter could not be parsed.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for ValidationError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
