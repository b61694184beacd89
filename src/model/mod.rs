//! Data transfer objects exchanged with API clients.

pub mod api;
pub mod club;
pub mod football_match;
pub mod player;
pub mod statistics;
