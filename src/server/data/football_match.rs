use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{model::football_match::ScheduleMatchDto, server::model::db::MatchModel};

/// Queries against the `football_match` table
pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new match as provided
    pub async fn create(&self, fixture: ScheduleMatchDto) -> Result<MatchModel, DbErr> {
        let football_match = entity::football_match::ActiveModel {
            home_club_id: ActiveValue::Set(fixture.home_club_id),
            away_club_id: ActiveValue::Set(fixture.away_club_id),
            date: ActiveValue::Set(fixture.date),
            home_goals: ActiveValue::Set(fixture.home_goals),
            away_goals: ActiveValue::Set(fixture.away_goals),
            ..Default::default()
        };

        football_match.insert(self.db).await
    }

    /// Get a match by ID, `None` if it does not exist
    pub async fn get_by_id(&self, match_id: i32) -> Result<Option<MatchModel>, DbErr> {
        entity::prelude::FootballMatch::find_by_id(match_id)
            .one(self.db)
            .await
    }

    /// Get every match ordered by ID
    pub async fn get_all(&self) -> Result<Vec<MatchModel>, DbErr> {
        entity::prelude::FootballMatch::find()
            .order_by_asc(entity::football_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether a club plays home or away in any match
    pub async fn exists_for_club(&self, club_id: i32) -> Result<bool, DbErr> {
        let football_match = entity::prelude::FootballMatch::find()
            .filter(
                Condition::any()
                    .add(entity::football_match::Column::HomeClubId.eq(club_id))
                    .add(entity::football_match::Column::AwayClubId.eq(club_id)),
            )
            .one(self.db)
            .await?;

        Ok(football_match.is_some())
    }

    /// Deletes a match, its events are removed by the cascading foreign key
    ///
    /// Returns OK regardless of match existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, match_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FootballMatch::delete_by_id(match_id)
            .exec(self.db)
            .await
    }
}
