use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::player::PlayerRequestDto, server::model::db::PlayerModel};

/// Queries against the `player` table
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new player
    ///
    /// The club is not checked beforehand, a missing club surfaces as a foreign key
    /// constraint violation from the store.
    pub async fn create(&self, player: PlayerRequestDto) -> Result<PlayerModel, DbErr> {
        let player = entity::player::ActiveModel {
            name: ActiveValue::Set(player.name),
            position: ActiveValue::Set(player.position),
            club_id: ActiveValue::Set(player.club_id),
            goals: ActiveValue::Set(player.goals),
            assists: ActiveValue::Set(player.assists),
            appearances: ActiveValue::Set(player.appearances),
            ..Default::default()
        };

        player.insert(self.db).await
    }

    /// Get a player by ID, `None` if it does not exist
    pub async fn get_by_id(&self, player_id: i32) -> Result<Option<PlayerModel>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    /// Get every player ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlayerModel>, DbErr> {
        entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }

    /// Get every player of a club ordered by ID
    pub async fn get_by_club_id(&self, club_id: i32) -> Result<Vec<PlayerModel>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::ClubId.eq(club_id))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }

    /// Get every player ranked by goals, then assists, highest first
    ///
    /// Players level on both are ordered by ID so the ranking is stable.
    pub async fn get_ranked_by_goals_and_assists(&self) -> Result<Vec<PlayerModel>, DbErr> {
        entity::prelude::Player::find()
            .order_by_desc(entity::player::Column::Goals)
            .order_by_desc(entity::player::Column::Assists)
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites every field of an existing player
    ///
    /// Returns `Ok(None)` if no player exists with the provided ID.
    pub async fn update(
        &self,
        player_id: i32,
        player: PlayerRequestDto,
    ) -> Result<Option<PlayerModel>, DbErr> {
        let existing = match entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut player_am = existing.into_active_model();
        player_am.name = ActiveValue::Set(player.name);
        player_am.position = ActiveValue::Set(player.position);
        player_am.club_id = ActiveValue::Set(player.club_id);
        player_am.goals = ActiveValue::Set(player.goals);
        player_am.assists = ActiveValue::Set(player.assists);
        player_am.appearances = ActiveValue::Set(player.appearances);

        let player = player_am.update(self.db).await?;

        Ok(Some(player))
    }

    /// Moves an existing player to another club
    ///
    /// Returns `Ok(None)` if no player exists with the provided ID.
    pub async fn update_club(
        &self,
        player_id: i32,
        club_id: i32,
    ) -> Result<Option<PlayerModel>, DbErr> {
        let existing = match entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut player_am = existing.into_active_model();
        player_am.club_id = ActiveValue::Set(club_id);

        let player = player_am.update(self.db).await?;

        Ok(Some(player))
    }

    /// Deletes a player, events involving the player are removed by the cascading foreign key
    ///
    /// Returns OK regardless of player existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, player_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Player::delete_by_id(player_id)
            .exec(self.db)
            .await
    }
}
