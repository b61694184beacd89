use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::ClubModel;

/// Queries against the `club` table
pub struct ClubRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClubRepository<'a, C> {
    /// Creates a new instance of [`ClubRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new club
    ///
    /// Fails with a unique constraint violation if the name is already taken.
    pub async fn create(&self, name: String, stadium: String) -> Result<ClubModel, DbErr> {
        let club = entity::club::ActiveModel {
            name: ActiveValue::Set(name),
            stadium: ActiveValue::Set(stadium),
            ..Default::default()
        };

        club.insert(self.db).await
    }

    /// Get a club by ID, `None` if it does not exist
    pub async fn get_by_id(&self, club_id: i32) -> Result<Option<ClubModel>, DbErr> {
        entity::prelude::Club::find_by_id(club_id).one(self.db).await
    }

    /// Get a club by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<ClubModel>, DbErr> {
        entity::prelude::Club::find()
            .filter(entity::club::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Get multiple clubs by their IDs, IDs without a club are skipped
    pub async fn get_many_by_ids(&self, club_ids: Vec<i32>) -> Result<Vec<ClubModel>, DbErr> {
        entity::prelude::Club::find()
            .filter(entity::club::Column::Id.is_in(club_ids))
            .all(self.db)
            .await
    }

    /// Get every club ordered by ID
    pub async fn get_all(&self) -> Result<Vec<ClubModel>, DbErr> {
        entity::prelude::Club::find()
            .order_by_asc(entity::club::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites the name & stadium of an existing club
    ///
    /// Returns `Ok(None)` if no club exists with the provided ID.
    pub async fn update(
        &self,
        club_id: i32,
        name: String,
        stadium: String,
    ) -> Result<Option<ClubModel>, DbErr> {
        let club = match entity::prelude::Club::find_by_id(club_id)
            .one(self.db)
            .await?
        {
            Some(club) => club,
            None => return Ok(None),
        };

        let mut club_am = club.into_active_model();
        club_am.name = ActiveValue::Set(name);
        club_am.stadium = ActiveValue::Set(stadium);

        let club = club_am.update(self.db).await?;

        Ok(Some(club))
    }

    /// Deletes a club, the club's players are removed by the cascading foreign key
    ///
    /// Returns OK regardless of club existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, club_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Club::delete_by_id(club_id)
            .exec(self.db)
            .await
    }
}
