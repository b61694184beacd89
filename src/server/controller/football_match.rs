use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        football_match::{MatchDto, RecordEventDto, ScheduleMatchDto},
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        error::{football::FootballError, Error},
        model::app::AppState,
        service::football_match::MatchService,
    },
};

pub static MATCH_TAG: &str = "match";

/// Schedule a match between two clubs
#[utoipa::path(
    post,
    path = "/api/match",
    tag = MATCH_TAG,
    request_body = ScheduleMatchDto,
    responses(
        (status = 201, description = "Match scheduled", body = MatchDto),
        (status = 400, description = "Malformed body, same club on both sides or unknown club", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn schedule_match(
    State(state): State<AppState>,
    ApiJson(fixture): ApiJson<ScheduleMatchDto>,
) -> Result<impl IntoResponse, Error> {
    let match_service = MatchService::new(&state.db);

    let football_match = match_service.schedule_match(fixture).await?;

    Ok((StatusCode::CREATED, Json(football_match)))
}

/// List every match with its clubs and events
#[utoipa::path(
    get,
    path = "/api/match",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "All matches ordered by ID", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_matches(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let match_service = MatchService::new(&state.db);

    let matches = match_service.get_all_matches().await?;

    Ok((StatusCode::OK, Json(matches)))
}

/// Get a match with its clubs and events
#[utoipa::path(
    get,
    path = "/api/match/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match found", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    ApiPath(match_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let match_service = MatchService::new(&state.db);

    let football_match = match_service
        .get_match_by_id(match_id)
        .await?
        .ok_or(FootballError::MatchNotFound(match_id))?;

    Ok((StatusCode::OK, Json(football_match)))
}

/// Delete a match and its events
#[utoipa::path(
    delete,
    path = "/api/match/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    ApiPath(match_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let match_service = MatchService::new(&state.db);

    if !match_service.delete_match(match_id).await? {
        return Err(FootballError::MatchNotFound(match_id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Record events against a match
#[utoipa::path(
    post,
    path = "/api/match/{id}/results",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = Vec<RecordEventDto>,
    responses(
        (status = 204, description = "Events recorded"),
        (status = 400, description = "Malformed body, blank event type or unknown player", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_match_result(
    State(state): State<AppState>,
    ApiPath(match_id): ApiPath<i32>,
    ApiJson(events): ApiJson<Vec<RecordEventDto>>,
) -> Result<impl IntoResponse, Error> {
    let match_service = MatchService::new(&state.db);

    if !match_service.record_match_result(match_id, events).await? {
        return Err(FootballError::MatchNotFound(match_id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
