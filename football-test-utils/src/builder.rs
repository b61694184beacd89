//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::Schema;

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// club fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    include_football_tables: bool,

    // Database fixtures to insert
    clubs: Vec<(String, String)>, // (name, stadium)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_football_tables: false,
            clubs: Vec::new(),
        }
    }

    /// Add every table of the football schema to the test database.
    ///
    /// Creates Club, Player, FootballMatch and Event in foreign key order.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_football_tables(mut self) -> Self {
        self.include_football_tables = true;
        self
    }

    /// Insert a club into the database.
    ///
    /// Queues a club fixture to be inserted during `build()`. Clubs are inserted in the
    /// order they were queued, so the first queued club receives ID 1.
    ///
    /// # Arguments
    /// - `name` - Club name, must be unique
    /// - `stadium` - Club stadium
    pub fn with_club(mut self, name: impl Into<String>, stadium: impl Into<String>) -> Self {
        self.clubs.push((name.into(), stadium.into()));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates the football tables if requested
    /// 2. Inserts club fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_football_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Club),
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::FootballMatch),
                schema.create_table_from_entity(entity::prelude::Event),
            ]);
        }

        test.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for (name, stadium) in self.clubs {
            test.football().insert_club(&name, &stadium).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
