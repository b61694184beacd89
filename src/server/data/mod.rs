//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table each. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same code runs against a pooled connection or
//! inside a transaction.

pub mod club;
pub mod event;
pub mod football_match;
pub mod player;
