//! Player management service.


use sea_orm::DatabaseConnection;

use crate::{
    model::player::{PlayerDto, PlayerRequestDto},
    server::{
        data::{club::ClubRepository, player::PlayerRepository},
        error::{football::FootballError, validation::ValidationError, Error},
        util::validate::{require_non_empty, require_non_negative},
    },
};

/// Service for managing players and moving them between clubs.
pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    /// Creates a new instance of [`PlayerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new player.
    ///
    /// The club reference is left to the store's foreign key, an unknown club ID fails
    /// with a constraint violation.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - The created player including its assigned ID
    /// - `Err(Error::ValidationError)` - Blank name or a negative counter
    /// - `Err(Error::DbErr)` - Database operation failed or the club does not exist
    pub async fn create_player(&self, player: PlayerRequestDto) -> Result<PlayerDto, Error> {
        validate_player(&player)?;

        let player_repo = PlayerRepository::new(self.db);
        let player = player_repo.create(player).await?;

        tracing::info!(
            player_id = player.id,
            club_id = player.club_id,
            "Created player {:?}",
            player.name
        );

        Ok(player.into())
    }

    /// Retrieves a player by ID, `Ok(None)` if it does not exist.
    pub async fn get_player_by_id(&self, player_id: i32) -> Result<Option<PlayerDto>, Error> {
        let player_repo = PlayerRepository::new(self.db);

        Ok(player_repo.get_by_id(player_id).await?.map(PlayerDto::from))
    }

    /// Retrieves every player ordered by ID.
    pub async fn get_all_players(&self) -> Result<Vec<PlayerDto>, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let players = player_repo.get_all().await?;

        Ok(players.into_iter().map(PlayerDto::from).collect())
    }

    /// Overwrites every field of an existing player.
    ///
    /// # Returns
    /// - `Ok(Some(PlayerDto))` - The updated player
    /// - `Ok(None)` - No player exists with the provided ID
    /// - `Err(Error::ValidationError)` - Blank name or a negative counter
    /// - `Err(Error::DbErr)` - Database operation failed or the club does not exist
    pub async fn update_player(
        &self,
        player_id: i32,
        player: PlayerRequestDto,
    ) -> Result<Option<PlayerDto>, Error> {
        validate_player(&player)?;

        let player_repo = PlayerRepository::new(self.db);
        let updated = player_repo.update(player_id, player).await?;

        Ok(updated.map(PlayerDto::from))
    }

    /// Deletes a player along with the match events they were involved in.
    ///
    /// # Returns
    /// - `Ok(true)` - Player was deleted
    /// - `Ok(false)` - No player exists with the provided ID
    pub async fn delete_player(&self, player_id: i32) -> Result<bool, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let result = player_repo.delete(player_id).await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves a player to another club.
    ///
    /// # Arguments
    /// - `player_id` - ID of the player to move
    /// - `new_club_id` - ID of the club the player joins
    ///
    /// # Returns
    /// - `Ok(true)` - Player now belongs to the new club
    /// - `Ok(false)` - No player exists with the provided ID
    /// - `Err(Error::FootballError(ClubNotFound))` - The new club does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn transfer_player(&self, player_id: i32, new_club_id: i32) -> Result<bool, Error> {
        let player_repo = PlayerRepository::new(self.db);
        let club_repo = ClubRepository::new(self.db);

        let Some(player) = player_repo.get_by_id(player_id).await? else {
            return Ok(false);
        };

        if club_repo.get_by_id(new_club_id).await?.is_none() {
            return Err(FootballError::ClubNotFound(new_club_id).into());
        }

        // Player could have been deleted between lookup and update
        let transferred = player_repo.update_club(player_id, new_club_id).await?;

        if transferred.is_some() {
            tracing::info!(
                player_id = player_id,
                from_club_id = player.club_id,
                to_club_id = new_club_id,
                "Transferred player"
            );
        }

        Ok(transferred.is_some())
    }
}

fn validate_player(player: &PlayerRequestDto) -> Result<(), ValidationError> {
    require_non_empty("name", &player.name)?;
    require_non_negative("goals", player.goals)?;
    require_non_negative("assists", player.assists)?;
    require_non_negative("appearances", player.appearances)?;

    Ok(())
}
