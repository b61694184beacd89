use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        club::{ClubDto, ClubRequestDto},
        player::PlayerDto,
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        error::{football::FootballError, Error},
        model::app::AppState,
        service::club::ClubService,
    },
};

pub static CLUB_TAG: &str = "club";

/// Create a new club
#[utoipa::path(
    post,
    path = "/api/club",
    tag = CLUB_TAG,
    request_body = ClubRequestDto,
    responses(
        (status = 201, description = "Club created", body = ClubDto),
        (status = 400, description = "Malformed body or empty name", body = ErrorDto),
        (status = 409, description = "A club with the same name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    ApiJson(club): ApiJson<ClubRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let club_service = ClubService::new(&state.db);

    let club = club_service.create_club(club).await?;

    Ok((StatusCode::CREATED, Json(club)))
}

/// List every club
#[utoipa::path(
    get,
    path = "/api/club",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "All clubs ordered by ID", body = Vec<ClubDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_clubs(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let club_service = ClubService::new(&state.db);

    let clubs = club_service.get_all_clubs().await?;

    Ok((StatusCode::OK, Json(clubs)))
}

/// Get a club by ID
#[utoipa::path(
    get,
    path = "/api/club/{id}",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Club found", body = ClubDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club(
    State(state): State<AppState>,
    ApiPath(club_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let club_service = ClubService::new(&state.db);

    let club = club_service
        .get_club_by_id(club_id)
        .await?
        .ok_or(FootballError::ClubNotFound(club_id))?;

    Ok((StatusCode::OK, Json(club)))
}

/// Update a club's name and stadium
#[utoipa::path(
    put,
    path = "/api/club/{id}",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    request_body = ClubRequestDto,
    responses(
        (status = 204, description = "Club updated"),
        (status = 400, description = "Malformed body or empty name", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 409, description = "Another club already uses the name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_club(
    State(state): State<AppState>,
    ApiPath(club_id): ApiPath<i32>,
    ApiJson(club): ApiJson<ClubRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let club_service = ClubService::new(&state.db);

    club_service
        .update_club(club_id, club)
        .await?
        .ok_or(FootballError::ClubNotFound(club_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a club and its players
///
/// Clubs that still appear in a recorded match cannot be deleted.
#[utoipa::path(
    delete,
    path = "/api/club/{id}",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    responses(
        (status = 204, description = "Club deleted"),
        (status = 400, description = "Club appears in a recorded match", body = ErrorDto),
        (status = 404, description = "Club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_club(
    State(state): State<AppState>,
    ApiPath(club_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let club_service = ClubService::new(&state.db);

    if !club_service.delete_club(club_id).await? {
        return Err(FootballError::ClubNotFound(club_id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List the players of a club
///
/// Responds with 404 when the club has no players or does not exist.
#[utoipa::path(
    get,
    path = "/api/club/{id}/players",
    tag = CLUB_TAG,
    params(("id" = i32, Path, description = "Club ID")),
    responses(
        (status = 200, description = "Players of the club ordered by ID", body = Vec<PlayerDto>),
        (status = 404, description = "No players found for the club", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players_of_club(
    State(state): State<AppState>,
    ApiPath(club_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let club_service = ClubService::new(&state.db);

    let players = club_service.get_players_of_club(club_id).await?;

    if players.is_empty() {
        if club_service.get_club_by_id(club_id).await?.is_none() {
            return Err(FootballError::ClubNotFound(club_id).into());
        }

        return Err(FootballError::NoPlayersInClub(club_id).into());
    }

    Ok((StatusCode::OK, Json(players)))
}
