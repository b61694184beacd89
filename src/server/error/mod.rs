//! Error types for the football manager server.
//!
//! Errors are split by domain (configuration, football records, request validation) and
//! aggregated into [`Error`]. Every error implements `IntoResponse` so controllers can
//! return `Result<impl IntoResponse, Error>` and propagate with `?`.

pub mod config;
pub mod football;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, football::FootballError, validation::ValidationError},
};

/// Main error type for the server application.
///
/// Absence of a record is not an error: services report it as `Ok(None)` or `Ok(false)`
/// and controllers turn it into a [`FootballError`] not found variant.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Football domain errors (unknown IDs, duplicate club names)
/// - Validation errors (malformed or out of range input)
/// - Database errors (constraint violations, connection issues)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Football domain error (not found, duplicate club name).
    #[error(transparent)]
    FootballError(#[from] FootballError),
    /// Client supplied input that cannot be accepted.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Internal error indicating a bug, such as a record missing despite a foreign key
    /// requiring it to exist.
    #[error("Internal error, this indicates a bug: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(rejection.into())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::ValidationError(rejection.into())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and foreign key violations
/// - 404 Not Found - Unknown club, player or match
/// - 409 Conflict - Duplicate club name or unique constraint violation
/// - 500 Internal Server Error - Everything else (logged, details withheld)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::FootballError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::DbErr(err) => match err.sql_err() {
                // The pre-insert name check can lose a race against a concurrent insert
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);

                    (
                        StatusCode::CONFLICT,
                        Json(ErrorDto {
                            error: "A record with the same unique value already exists"
                                .to_string(),
                        }),
                    )
                        .into_response()
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!("Foreign key constraint violation: {}", detail);

                    (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorDto {
                            error: "Request references a record that does not exist or is still referenced by other records"
                                .to_string(),
                        }),
                    )
                        .into_response()
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
