use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        player::{PlayerDto, PlayerRequestDto},
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        error::{football::FootballError, Error},
        model::app::AppState,
        service::player::PlayerService,
    },
};

pub static PLAYER_TAG: &str = "player";

/// Create a new player
#[utoipa::path(
    post,
    path = "/api/player",
    tag = PLAYER_TAG,
    request_body = PlayerRequestDto,
    responses(
        (status = 201, description = "Player created", body = PlayerDto),
        (status = 400, description = "Malformed body, invalid field or unknown club", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    ApiJson(player): ApiJson<PlayerRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    let player = player_service.create_player(player).await?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// List every player
#[utoipa::path(
    get,
    path = "/api/player",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "All players ordered by ID", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_players(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    let players = player_service.get_all_players().await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Get a player by ID
#[utoipa::path(
    get,
    path = "/api/player/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Player found", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    ApiPath(player_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    let player = player_service
        .get_player_by_id(player_id)
        .await?
        .ok_or(FootballError::PlayerNotFound(player_id))?;

    Ok((StatusCode::OK, Json(player)))
}

/// Overwrite every field of a player
#[utoipa::path(
    put,
    path = "/api/player/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    request_body = PlayerRequestDto,
    responses(
        (status = 204, description = "Player updated"),
        (status = 400, description = "Malformed body, invalid field or unknown club", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    ApiPath(player_id): ApiPath<i32>,
    ApiJson(player): ApiJson<PlayerRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    player_service
        .update_player(player_id, player)
        .await?
        .ok_or(FootballError::PlayerNotFound(player_id))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a player and the events they were involved in
#[utoipa::path(
    delete,
    path = "/api/player/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 204, description = "Player deleted"),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    ApiPath(player_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    if !player_service.delete_player(player_id).await? {
        return Err(FootballError::PlayerNotFound(player_id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Transfer a player to another club
///
/// The request body is the ID of the club the player joins.
#[utoipa::path(
    post,
    path = "/api/player/{id}/transfer",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    request_body(content = i32, description = "ID of the new club"),
    responses(
        (status = 204, description = "Player transferred"),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 404, description = "Player or club not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transfer_player(
    State(state): State<AppState>,
    ApiPath(player_id): ApiPath<i32>,
    ApiJson(new_club_id): ApiJson<i32>,
) -> Result<impl IntoResponse, Error> {
    let player_service = PlayerService::new(&state.db);

    if !player_service
        .transfer_player(player_id, new_club_id)
        .await?
    {
        return Err(FootballError::PlayerNotFound(player_id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
