//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main crate's `server::model::db` module so
//! fixtures and assertions read the same way in both places.

/// Type alias for the club database model.
pub type ClubModel = entity::club::Model;

/// Type alias for the player database model.
pub type PlayerModel = entity::player::Model;

/// Type alias for the match database model.
pub type MatchModel = entity::football_match::Model;

/// Type alias for the match event database model.
pub type EventModel = entity::event::Model;
