//! Club management service.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        club::{ClubDto, ClubRequestDto},
        player::PlayerDto,
    },
    server::{
        data::{club::ClubRepository, football_match::MatchRepository, player::PlayerRepository},
        error::{football::FootballError, Error},
        util::validate::require_non_empty,
    },
};

/// Service for creating, reading, updating and deleting clubs.
pub struct ClubService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClubService<'a> {
    /// Creates a new instance of [`ClubService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether any club already uses the provided name.
    pub async fn club_exists(&self, name: &str) -> Result<bool, Error> {
        let club_repo = ClubRepository::new(self.db);

        Ok(club_repo.get_by_name(name).await?.is_some())
    }

    /// Creates a new club with a unique name.
    ///
    /// # Arguments
    /// - `club` - Name and stadium of the new club
    ///
    /// # Returns
    /// - `Ok(ClubDto)` - The created club including its assigned ID
    /// - `Err(Error::ValidationError)` - Name is blank
    /// - `Err(Error::FootballError(DuplicateClubName))` - Name is already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_club(&self, club: ClubRequestDto) -> Result<ClubDto, Error> {
        require_non_empty("name", &club.name)?;

        if self.club_exists(&club.name).await? {
            return Err(FootballError::DuplicateClubName(club.name).into());
        }

        let club_repo = ClubRepository::new(self.db);
        let club = club_repo.create(club.name, club.stadium).await?;

        tracing::info!(club_id = club.id, "Created club {:?}", club.name);

        Ok(club.into())
    }

    /// Retrieves a club by ID, `Ok(None)` if it does not exist.
    pub async fn get_club_by_id(&self, club_id: i32) -> Result<Option<ClubDto>, Error> {
        let club_repo = ClubRepository::new(self.db);

        Ok(club_repo.get_by_id(club_id).await?.map(ClubDto::from))
    }

    /// Retrieves every club ordered by ID.
    pub async fn get_all_clubs(&self) -> Result<Vec<ClubDto>, Error> {
        let club_repo = ClubRepository::new(self.db);

        let clubs = club_repo.get_all().await?;

        Ok(clubs.into_iter().map(ClubDto::from).collect())
    }

    /// Overwrites the name and stadium of an existing club.
    ///
    /// Keeping the club's current name is allowed, taking another club's name is not.
    ///
    /// # Returns
    /// - `Ok(Some(ClubDto))` - The updated club
    /// - `Ok(None)` - No club exists with the provided ID
    /// - `Err(Error::ValidationError)` - Name is blank
    /// - `Err(Error::FootballError(DuplicateClubName))` - Name belongs to another club
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_club(
        &self,
        club_id: i32,
        club: ClubRequestDto,
    ) -> Result<Option<ClubDto>, Error> {
        require_non_empty("name", &club.name)?;

        let club_repo = ClubRepository::new(self.db);

        if club_repo.get_by_id(club_id).await?.is_none() {
            return Ok(None);
        }

        if let Some(existing) = club_repo.get_by_name(&club.name).await? {
            if existing.id != club_id {
                return Err(FootballError::DuplicateClubName(club.name).into());
            }
        }

        let updated = club_repo.update(club_id, club.name, club.stadium).await?;

        Ok(updated.map(ClubDto::from))
    }

    /// Deletes a club along with its players.
    ///
    /// # Returns
    /// - `Ok(true)` - Club was deleted
    /// - `Ok(false)` - No club exists with the provided ID
    /// - `Err(Error::FootballError(ClubHasMatches))` - Club still appears in a recorded match
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_club(&self, club_id: i32) -> Result<bool, Error> {
        let club_repo = ClubRepository::new(self.db);
        let match_repo = MatchRepository::new(self.db);

        if match_repo.exists_for_club(club_id).await? {
            return Err(FootballError::ClubHasMatches(club_id).into());
        }

        let result = club_repo.delete(club_id).await?;

        if result.rows_affected > 0 {
            tracing::info!(club_id = club_id, "Deleted club");
        }

        Ok(result.rows_affected > 0)
    }

    /// Retrieves the players of a club ordered by ID.
    ///
    /// An unknown club simply has no players.
    pub async fn get_players_of_club(&self, club_id: i32) -> Result<Vec<PlayerDto>, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let players = player_repo.get_by_club_id(club_id).await?;

        Ok(players.into_iter().map(PlayerDto::from).collect())
    }
}
