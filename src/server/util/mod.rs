//! Utility functions and helpers for server operations.
//!
//! Currently holds the field level validation used by services before anything is
//! written to the store.

pub mod validate;
