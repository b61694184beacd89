use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::{
    model::statistics::PlayerStatisticsDto,
    server::{controller::statistics::get_player_statistics, model::app::AppState},
};

use super::*;

/// Expect 200 OK with players ordered by goals
#[tokio::test]
async fn ok_with_ranked_players() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_football_tables()
        .with_club("Arsenal", "Emirates")
        .build()
        .await?;
    let low = test.football().insert_player(1, "Low", 1, 0).await?;
    let high = test.football().insert_player(1, "High", 12, 2).await?;

    let result = get_player_statistics(State(test.to_app_state::<AppState>())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let statistics: Vec<PlayerStatisticsDto> = read_json(resp).await?;
    let ids: Vec<i32> = statistics.iter().map(|s| s.player.id).collect();
    assert_eq!(ids, vec![high.id, low.id]);

    Ok(())
}
