use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::club::ClubDto;

/// A match together with both clubs and every recorded event
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub home_club: ClubDto,
    pub away_club: ClubDto,
    pub date: NaiveDateTime,
    pub home_goals: i32,
    pub away_goals: i32,
    /// Events ordered by timestamp
    pub events: Vec<EventDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScheduleMatchDto {
    pub home_club_id: i32,
    pub away_club_id: i32,
    pub date: NaiveDateTime,
    #[serde(default)]
    pub home_goals: i32,
    #[serde(default)]
    pub away_goals: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    /// Free text classification such as `goal` or `yellow card`
    #[serde(rename = "type")]
    pub event_type: String,
    pub timestamp: NaiveDateTime,
}

/// An event to record against a match, the match ID is taken from the request path
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecordEventDto {
    pub player_id: i32,
    #[serde(rename = "type")]
    pub event_type: String,
    pub timestamp: NaiveDateTime,
}

impl From<entity::event::Model> for EventDto {
    fn from(event: entity::event::Model) -> Self {
        Self {
            id: event.id,
            match_id: event.match_id,
            player_id: event.player_id,
            event_type: event.event_type,
            timestamp: event.timestamp,
        }
    }
}
