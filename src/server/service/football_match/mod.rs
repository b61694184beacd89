//! Match scheduling, result recording and match detail loading.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        club::ClubDto,
        football_match::{EventDto, MatchDto, RecordEventDto, ScheduleMatchDto},
    },
    server::{
        data::{club::ClubRepository, event::EventRepository, football_match::MatchRepository},
        error::{validation::ValidationError, Error},
        model::db::{ClubModel, MatchModel},
        util::validate::{require_non_empty, require_non_negative},
    },
};

/// Service for scheduling matches and recording their events.
pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    /// Creates a new instance of [`MatchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a match between two different clubs.
    ///
    /// # Returns
    /// - `Ok(MatchDto)` - The scheduled match with both clubs and no events
    /// - `Err(Error::ValidationError)` - Both sides are the same club or a negative score
    /// - `Err(Error::DbErr)` - Database operation failed or a club does not exist
    pub async fn schedule_match(&self, fixture: ScheduleMatchDto) -> Result<MatchDto, Error> {
        if fixture.home_club_id == fixture.away_club_id {
            return Err(ValidationError::SameClub(fixture.home_club_id).into());
        }
        require_non_negative("home_goals", fixture.home_goals)?;
        require_non_negative("away_goals", fixture.away_goals)?;

        let match_repo = MatchRepository::new(self.db);
        let football_match = match_repo.create(fixture).await?;

        tracing::info!(
            match_id = football_match.id,
            home_club_id = football_match.home_club_id,
            away_club_id = football_match.away_club_id,
            "Scheduled match"
        );

        let mut details = self.load_details(vec![football_match]).await?;

        details
            .pop()
            .ok_or_else(|| Error::InternalError("Scheduled match missing from details".to_string()))
    }

    /// Retrieves a match with its clubs and events, `Ok(None)` if it does not exist.
    pub async fn get_match_by_id(&self, match_id: i32) -> Result<Option<MatchDto>, Error> {
        let match_repo = MatchRepository::new(self.db);

        let Some(football_match) = match_repo.get_by_id(match_id).await? else {
            return Ok(None);
        };

        let mut details = self.load_details(vec![football_match]).await?;

        Ok(details.pop())
    }

    /// Retrieves every match ordered by ID with its clubs and events.
    pub async fn get_all_matches(&self) -> Result<Vec<MatchDto>, Error> {
        let match_repo = MatchRepository::new(self.db);

        let matches = match_repo.get_all().await?;

        self.load_details(matches).await
    }

    /// Records events against an existing match.
    ///
    /// # Returns
    /// - `Ok(true)` - Events were recorded, an empty list records nothing
    /// - `Ok(false)` - No match exists with the provided ID
    /// - `Err(Error::ValidationError)` - An event has a blank type
    /// - `Err(Error::DbErr)` - Database operation failed or a player does not exist
    pub async fn record_match_result(
        &self,
        match_id: i32,
        events: Vec<RecordEventDto>,
    ) -> Result<bool, Error> {
        for event in &events {
            require_non_empty("type", &event.event_type)?;
        }

        let match_repo = MatchRepository::new(self.db);
        let event_repo = EventRepository::new(self.db);

        if match_repo.get_by_id(match_id).await?.is_none() {
            return Ok(false);
        }

        let count = events.len();
        event_repo.create_many(match_id, events).await?;

        tracing::info!(match_id = match_id, count = count, "Recorded match events");

        Ok(true)
    }

    /// Deletes a match along with its events.
    ///
    /// # Returns
    /// - `Ok(true)` - Match was deleted
    /// - `Ok(false)` - No match exists with the provided ID
    pub async fn delete_match(&self, match_id: i32) -> Result<bool, Error> {
        let match_repo = MatchRepository::new(self.db);

        let result = match_repo.delete(match_id).await?;

        Ok(result.rows_affected > 0)
    }

    /// Attaches clubs and events to matches using one query for each.
    async fn load_details(&self, matches: Vec<MatchModel>) -> Result<Vec<MatchDto>, Error> {
        if matches.is_empty() {
            return Ok(Vec::new());
        }

        let club_repo = ClubRepository::new(self.db);
        let event_repo = EventRepository::new(self.db);

        let mut club_ids: Vec<i32> = matches
            .iter()
            .flat_map(|m| [m.home_club_id, m.away_club_id])
            .collect();
        club_ids.sort_unstable();
        club_ids.dedup();

        let match_ids: Vec<i32> = matches.iter().map(|m| m.id).collect();

        let clubs: HashMap<i32, ClubModel> = club_repo
            .get_many_by_ids(club_ids)
            .await?
            .into_iter()
            .map(|club| (club.id, club))
            .collect();

        let mut events_by_match: HashMap<i32, Vec<EventDto>> = HashMap::new();
        for event in event_repo.get_by_match_ids(match_ids).await? {
            events_by_match
                .entry(event.match_id)
                .or_default()
                .push(EventDto::from(event));
        }

        matches
            .into_iter()
            .map(|m| {
                let home_club = lookup_club(&clubs, m.id, m.home_club_id)?;
                let away_club = lookup_club(&clubs, m.id, m.away_club_id)?;

                Ok(MatchDto {
                    id: m.id,
                    home_club,
                    away_club,
                    date: m.date,
                    home_goals: m.home_goals,
                    away_goals: m.away_goals,
                    events: events_by_match.remove(&m.id).unwrap_or_default(),
                })
            })
            .collect()
    }
}

fn lookup_club(
    clubs: &HashMap<i32, ClubModel>,
    match_id: i32,
    club_id: i32,
) -> Result<ClubDto, Error> {
    // Foreign keys guarantee the club exists
    clubs
        .get(&club_id)
        .cloned()
        .map(ClubDto::from)
        .ok_or_else(|| {
            Error::InternalError(format!(
                "Club {} referenced by match {} was not found",
                club_id, match_id
            ))
        })
}
