//! League statistics: club standings and player rankings.

mod standings;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        player::PlayerDto,
        statistics::{ClubStatisticsDto, PlayerStatisticsDto},
    },
    server::{
        data::{club::ClubRepository, football_match::MatchRepository, player::PlayerRepository},
        error::Error,
    },
};

pub use standings::rank_clubs;

/// Read only aggregates over clubs, players and matches.
pub struct StatisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsService<'a> {
    /// Creates a new instance of [`StatisticsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the league table from every recorded match.
    ///
    /// See [`rank_clubs`] for scoring and ordering.
    pub async fn get_club_rankings(&self) -> Result<Vec<ClubStatisticsDto>, Error> {
        let club_repo = ClubRepository::new(self.db);
        let match_repo = MatchRepository::new(self.db);

        let clubs = club_repo.get_all().await?;
        let matches = match_repo.get_all().await?;

        Ok(rank_clubs(clubs, &matches))
    }

    /// Ranks players by goals, then assists, then ID.
    pub async fn get_player_statistics(&self) -> Result<Vec<PlayerStatisticsDto>, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let players = player_repo.get_ranked_by_goals_and_assists().await?;

        Ok(players
            .into_iter()
            .map(|player| PlayerStatisticsDto {
                goals: player.goals,
                assists: player.assists,
                appearances: player.appearances,
                player: PlayerDto::from(player),
            })
            .collect())
    }
}
