//! Tests for statistics controller endpoints.

mod get_club_rankings;
mod get_player_statistics;

use super::*;
