use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{model::football_match::RecordEventDto, server::model::db::EventModel};

/// Queries against the `event` table
pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Bulk inserts events for a match
    ///
    /// Every event is stamped with `match_id`. An empty list performs no query.
    pub async fn create_many(
        &self,
        match_id: i32,
        events: Vec<RecordEventDto>,
    ) -> Result<(), DbErr> {
        if events.is_empty() {
            return Ok(());
        }

        let events = events.into_iter().map(|event| entity::event::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            player_id: ActiveValue::Set(event.player_id),
            event_type: ActiveValue::Set(event.event_type),
            timestamp: ActiveValue::Set(event.timestamp),
            ..Default::default()
        });

        entity::prelude::Event::insert_many(events)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Get the events of multiple matches ordered by timestamp, then ID
    pub async fn get_by_match_ids(&self, match_ids: Vec<i32>) -> Result<Vec<EventModel>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::MatchId.is_in(match_ids))
            .order_by_asc(entity::event::Column::Timestamp)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }
}
