use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::{
    model::football_match::RecordEventDto,
    server::{
        controller::{
            football_match::record_match_result,
            util::extract::{ApiJson, ApiPath},
        },
        model::app::AppState,
    },
};

use super::*;

/// Expect 204 No Content when events are recorded
#[tokio::test]
async fn no_content_for_existing_match() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (home, away, home_player, _) = test.football().insert_clubs_with_players().await?;
    let match_model = test.football().insert_match(home.id, away.id, 1, 0).await?;

    let events = vec![RecordEventDto {
        player_id: home_player.id,
        event_type: "goal".to_string(),
        timestamp: factory::mock_kickoff(),
    }];

    let result = record_match_result(
        State(test.to_app_state::<AppState>()),
        ApiPath(match_model.id),
        ApiJson(events),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 404 Not Found for a match that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_match() -> Result<(), TestError> {
    let test = TestBuilder::new().with_football_tables().build().await?;

    let result = record_match_result(
        State(test.to_app_state::<AppState>()),
        ApiPath(1),
        ApiJson(Vec::new()),
    )
    .await;

    let resp = result.err().expect("match should be missing").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
