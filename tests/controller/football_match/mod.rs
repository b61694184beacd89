//! Tests for match controller endpoints.

mod delete_match;
mod get_match;
mod record_match_result;
mod schedule_match;

use football_manager::model::football_match::ScheduleMatchDto;

use super::*;

fn fixture(home_club_id: i32, away_club_id: i32) -> ScheduleMatchDto {
    ScheduleMatchDto {
        home_club_id,
        away_club_id,
        date: factory::mock_kickoff(),
        home_goals: 0,
        away_goals: 0,
    }
}
