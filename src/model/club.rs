use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClubDto {
    pub id: i32,
    pub name: String,
    pub stadium: String,
}

/// Request body used both to create a club and to update an existing one
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClubRequestDto {
    /// Club name, must be unique across all clubs
    pub name: String,
    #[serde(default)]
    pub stadium: String,
}

impl From<entity::club::Model> for ClubDto {
    fn from(club: entity::club::Model) -> Self {
        Self {
            id: club.id,
            name: club.name,
            stadium: club.stadium,
        }
    }
}
