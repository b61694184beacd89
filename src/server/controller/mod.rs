//! HTTP controller endpoints for the football manager API.
//!
//! Axum handlers for clubs, players, matches and statistics. Controllers extract and
//! validate request input, call into the services, and map absent records to 404
//! responses. Every handler is annotated with utoipa for OpenAPI documentation.

pub mod club;
pub mod football_match;
pub mod player;
pub mod statistics;
pub mod util;
