use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        statistics::{ClubStatisticsDto, PlayerStatisticsDto},
    },
    server::{error::Error, model::app::AppState, service::statistics::StatisticsService},
};

pub static STATISTICS_TAG: &str = "statistics";

/// League table of every club
///
/// 3 points per win and 1 per draw. Ordered by points, ties broken by club ID.
#[utoipa::path(
    get,
    path = "/api/statistics/club-rankings",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Club standings", body = Vec<ClubStatisticsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_club_rankings(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let statistics_service = StatisticsService::new(&state.db);

    let rankings = statistics_service.get_club_rankings().await?;

    Ok((StatusCode::OK, Json(rankings)))
}

/// Players ranked by goals, then assists
#[utoipa::path(
    get,
    path = "/api/statistics/player-statistics",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Player rankings", body = Vec<PlayerStatisticsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_statistics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let statistics_service = StatisticsService::new(&state.db);

    let statistics = statistics_service.get_player_statistics().await?;

    Ok((StatusCode::OK, Json(statistics)))
}
