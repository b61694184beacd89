//! Service layer for business logic.
//!
//! Services sit between controllers and repositories. They validate input, enforce the
//! integrity rules the store cannot express on its own (unique club names checked up
//! front, distinct clubs per match, transfer targets that exist) and shape records into
//! the DTOs returned over HTTP.

pub mod club;
pub mod football_match;
pub mod player;
pub mod statistics;
