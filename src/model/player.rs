use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub club_id: i32,
    pub goals: i32,
    pub assists: i32,
    pub appearances: i32,
}

/// Request body used both to create a player and to overwrite an existing one
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlayerRequestDto {
    pub name: String,
    #[serde(default)]
    pub position: String,
    /// ID of the club the player belongs to
    pub club_id: i32,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub appearances: i32,
}

impl From<entity::player::Model> for PlayerDto {
    fn from(player: entity::player::Model) -> Self {
        Self {
            id: player.id,
            name: player.name,
            position: player.position,
            club_id: player.club_id,
            goals: player.goals,
            assists: player.assists,
            appearances: player.appearances,
        }
    }
}
