use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::server::{
    controller::{player::delete_player, util::extract::ApiPath},
    model::app::AppState,
};

use super::*;

/// Expect 204 No Content even when the player has recorded events
#[tokio::test]
async fn no_content_for_player_with_events() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (home, away, home_player, _) = test.football().insert_clubs_with_players().await?;
    let match_model = test.football().insert_match(home.id, away.id, 1, 0).await?;
    test.football()
        .insert_event(match_model.id, home_player.id, "goal")
        .await?;

    let result = delete_player(
        State(test.to_app_state::<AppState>()),
        ApiPath(home_player.id),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 404 Not Found for a player that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_football_tables().build().await?;

    let result = delete_player(State(test.to_app_state::<AppState>()), ApiPath(1)).await;

    let resp = result.err().expect("player should be missing").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
