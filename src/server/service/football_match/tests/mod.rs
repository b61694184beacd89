
use chrono::Duration;
use football_test_utils::prelude::*;

use crate::model::football_match::{RecordEventDto, ScheduleMatchDto};

fn fixture(home_club_id: i32, away_club_id: i32) -> ScheduleMatchDto {
    ScheduleMatchDto {
        home_club_id,
        away_club_id,
        date: factory::mock_kickoff(),
        home_goals: 0,
        away_goals: 0,
    }
}

fn event(player_id: i32, event_type: &str, minute: i64) -> RecordEventDto {
    RecordEventDto {
        player_id,
        event_type: event_type.to_string(),
        timestamp: factory::mock_kickoff() + Duration::minutes(minute),
    }
}
