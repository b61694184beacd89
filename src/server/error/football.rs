use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors tied to the club, player and match records themselves.
#[derive(Error, Debug)]
pub enum FootballError {
    /// No club exists with the given ID.
    #[error("Club ID {0} not found")]
    ClubNotFound(i32),
    /// No player exists with the given ID.
    #[error("Player ID {0} not found")]
    PlayerNotFound(i32),
    /// No match exists with the given ID.
    #[error("Match ID {0} not found")]
    MatchNotFound(i32),
    /// The club exists but has no players registered.
    #[error("No players found for club ID {0}")]
    NoPlayersInClub(i32),
    /// The club still plays home or away in a recorded match.
    #[error("Club ID {0} appears in recorded matches and cannot be deleted")]
    ClubHasMatches(i32),
    /// Another club already uses the given name.
    #[error("A club named {0:?} already exists")]
    DuplicateClubName(String),
}

impl IntoResponse for FootballError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::ClubNotFound(_)
            | Self::PlayerNotFound(_)
            | Self::MatchNotFound(_)
            | Self::NoPlayersInClub(_) => StatusCode::NOT_FOUND,
            Self::ClubHasMatches(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateClubName(_) => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
