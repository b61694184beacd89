//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures don't need to spell out the generated
//! `entity` crate paths.

/// Type alias for the club database model.
///
/// # Fields (from `entity::club::Model`)
/// - `id` - Primary key
/// - `name` - Unique club name
/// - `stadium` - Home stadium
pub type ClubModel = entity::club::Model;

/// Type alias for the player database model.
///
/// # Fields (from `entity::player::Model`)
/// - `id` - Primary key
/// - `name`, `position` - Player details
/// - `club_id` - Foreign key to the club the player belongs to
/// - `goals`, `assists`, `appearances` - Cumulative counters
pub type PlayerModel = entity::player::Model;

/// Type alias for the match database model.
///
/// # Fields (from `entity::football_match::Model`)
/// - `id` - Primary key
/// - `home_club_id`, `away_club_id` - Foreign keys to the competing clubs
/// - `date` - Kickoff
/// - `home_goals`, `away_goals` - Final score
pub type MatchModel = entity::football_match::Model;

/// Type alias for the match event database model.
///
/// # Fields (from `entity::event::Model`)
/// - `id` - Primary key
/// - `match_id` - Foreign key to the match
/// - `player_id` - Foreign key to the player involved
/// - `event_type` - Free text classification
/// - `timestamp` - When the event occurred
pub type EventModel = entity::event::Model;
