//! Tests for player controller endpoints.

mod delete_player;
mod transfer_player;
mod update_player;

use football_manager::model::player::PlayerRequestDto;

use super::*;

fn player_request(club_id: i32) -> PlayerRequestDto {
    PlayerRequestDto {
        name: "Bukayo Saka".to_string(),
        position: "Winger".to_string(),
        club_id,
        goals: 16,
        assists: 9,
        appearances: 35,
    }
}
