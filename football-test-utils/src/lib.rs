//! Shared test harness for the football manager workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares which tables and
//! fixtures are needed, and `build()` returns a [`TestContext`] backed by a fresh
//! in-memory SQLite database that tests then operate on.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
