use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::factory::mock_kickoff,
    model::{ClubModel, EventModel, MatchModel, PlayerModel},
    TestContext,
};

impl TestContext {
    pub fn football<'a>(&'a mut self) -> FootballFixtures<'a> {
        FootballFixtures { test: self }
    }
}

pub struct FootballFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> FootballFixtures<'a> {
    pub async fn insert_club(&self, name: &str, stadium: &str) -> Result<ClubModel, TestError> {
        Ok(
            entity::prelude::Club::insert(entity::club::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                stadium: ActiveValue::Set(stadium.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_player(
        &self,
        club_id: i32,
        name: &str,
        goals: i32,
        assists: i32,
    ) -> Result<PlayerModel, TestError> {
        Ok(
            entity::prelude::Player::insert(entity::player::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                position: ActiveValue::Set("Forward".to_string()),
                club_id: ActiveValue::Set(club_id),
                goals: ActiveValue::Set(goals),
                assists: ActiveValue::Set(assists),
                appearances: ActiveValue::Set(0),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_match(
        &self,
        home_club_id: i32,
        away_club_id: i32,
        home_goals: i32,
        away_goals: i32,
    ) -> Result<MatchModel, TestError> {
        Ok(
            entity::prelude::FootballMatch::insert(entity::football_match::ActiveModel {
                home_club_id: ActiveValue::Set(home_club_id),
                away_club_id: ActiveValue::Set(away_club_id),
                date: ActiveValue::Set(mock_kickoff()),
                home_goals: ActiveValue::Set(home_goals),
                away_goals: ActiveValue::Set(away_goals),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_event(
        &self,
        match_id: i32,
        player_id: i32,
        event_type: &str,
    ) -> Result<EventModel, TestError> {
        Ok(
            entity::prelude::Event::insert(entity::event::ActiveModel {
                match_id: ActiveValue::Set(match_id),
                player_id: ActiveValue::Set(player_id),
                event_type: ActiveValue::Set(event_type.to_string()),
                timestamp: ActiveValue::Set(mock_kickoff()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert two clubs with a single player each.
    ///
    /// # Returns
    /// - `(home_club, away_club, home_player, away_player)`
    pub async fn insert_clubs_with_players(
        &self,
    ) -> Result<(ClubModel, ClubModel, PlayerModel, PlayerModel), TestError> {
        let home_club = self.insert_club("Home FC", "Home Ground").await?;
        let away_club = self.insert_club("Away United", "Away Park").await?;
        let home_player = self.insert_player(home_club.id, "Home Striker", 0, 0).await?;
        let away_player = self.insert_player(away_club.id, "Away Striker", 0, 0).await?;

        Ok((home_club, away_club, home_player, away_player))
    }
}
