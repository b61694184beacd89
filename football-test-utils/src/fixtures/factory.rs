//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating club and match models with standard
//! test values. These are in-memory model instances that don't require database
//! interaction, suitable for unit tests of ranking logic.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{ClubModel, MatchModel};

/// Fixed kickoff time used by mock matches and events.
pub fn mock_kickoff() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 24)
        .and_then(|date| date.and_hms_opt(15, 0, 0))
        .unwrap_or_default()
}

/// Create a mock club model for testing.
///
/// # Arguments
/// - `id` - Club record ID
/// - `name` - Club name
pub fn mock_club_model(id: i32, name: &str) -> ClubModel {
    ClubModel {
        id,
        name: name.to_string(),
        stadium: format!("{} Stadium", name),
    }
}

/// Create a mock match model for testing.
///
/// # Arguments
/// - `id` - Match record ID
/// - `home_club_id` - Home club record ID
/// - `away_club_id` - Away club record ID
/// - `home_goals` - Goals scored by the home club
/// - `away_goals` - Goals scored by the away club
pub fn mock_match_model(
    id: i32,
    home_club_id: i32,
    away_club_id: i32,
    home_goals: i32,
    away_goals: i32,
) -> MatchModel {
    MatchModel {
        id,
        home_club_id,
        away_club_id,
        date: mock_kickoff(),
        home_goals,
        away_goals,
    }
}
