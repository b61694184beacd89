//! Test fixture modules for database record creation.
//!
//! - `factory` - in-memory models for unit tests that never touch the database
//! - `football` - inserts clubs, players, matches and events through [`TestContext::football`](crate::TestContext::football)

pub mod factory;
pub mod football;
