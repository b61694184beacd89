//! Utility types for controller request handling.
//!
//! Provides request extractors whose rejections are converted into the application
//! [`Error`](crate::server::error::Error) so malformed input gets the same JSON error body
//! as every other failure.

pub mod extract;
