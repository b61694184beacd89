use serde::{Deserialize, Serialize};

use crate::model::{club::ClubDto, player::PlayerDto};

/// A club's standing in the league table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClubStatisticsDto {
    pub club: ClubDto,
    /// 3 points per win, 1 per draw
    pub points: i32,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i64,
    pub goals_against: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlayerStatisticsDto {
    pub player: PlayerDto,
    pub goals: i32,
    pub assists: i32,
    pub appearances: i32,
}
