//! League table computation over already loaded clubs and matches.

use std::collections::HashMap;

use crate::{
    model::{club::ClubDto, statistics::ClubStatisticsDto},
    server::model::db::{ClubModel, MatchModel},
};

const POINTS_FOR_WIN: i32 = 3;
const POINTS_FOR_DRAW: i32 = 1;

#[derive(Default)]
struct Record {
    played: i32,
    wins: i32,
    draws: i32,
    losses: i32,
    goals_for: i64,
    goals_against: i64,
}

impl Record {
    fn add_result(&mut self, scored: i32, conceded: i32) {
        self.played += 1;
        self.goals_for += i64::from(scored);
        self.goals_against += i64::from(conceded);

        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
            std::cmp::Ordering::Less => self.losses += 1,
        }
    }

    fn points(&self) -> i32 {
        self.wins * POINTS_FOR_WIN + self.draws * POINTS_FOR_DRAW
    }
}

/// Ranks every club by points earned across the provided matches.
///
/// Every club appears exactly once, clubs without matches rank with 0 points. Ordered by
/// points descending with ties broken by club ID ascending. Matches referencing a club
/// not present in `clubs` only count towards the clubs that are.
pub fn rank_clubs(clubs: Vec<ClubModel>, matches: &[MatchModel]) -> Vec<ClubStatisticsDto> {
    let mut records: HashMap<i32, Record> = clubs
        .iter()
        .map(|club| (club.id, Record::default()))
        .collect();

    for m in matches {
        if let Some(home) = records.get_mut(&m.home_club_id) {
            home.add_result(m.home_goals, m.away_goals);
        }
        if let Some(away) = records.get_mut(&m.away_club_id) {
            away.add_result(m.away_goals, m.home_goals);
        }
    }

    let mut table: Vec<ClubStatisticsDto> = clubs
        .into_iter()
        .map(|club| {
            let record = records.remove(&club.id).unwrap_or_default();

            ClubStatisticsDto {
                points: record.points(),
                played: record.played,
                wins: record.wins,
                draws: record.draws,
                losses: record.losses,
                goals_for: record.goals_for,
                goals_against: record.goals_against,
                club: ClubDto::from(club),
            }
        })
        .collect();

    table.sort_by(|a, b| b.points.cmp(&a.points).then(a.club.id.cmp(&b.club.id)));

    table
}
