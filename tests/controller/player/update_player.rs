use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::server::{
    controller::{
        player::update_player,
        util::extract::{ApiJson, ApiPath},
    },
    model::app::AppState,
};

use super::*;

/// Expect 204 No Content for an existing player
#[tokio::test]
async fn no_content_for_existing_player() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (home, _, home_player, _) = test.football().insert_clubs_with_players().await?;

    let result = update_player(
        State(test.to_app_state::<AppState>()),
        ApiPath(home_player.id),
        ApiJson(player_request(home.id)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 404 Not Found for a player that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_player() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_club("Arsenal", "Emirates")
        .build()
        .await?;

    let result = update_player(
        State(test.to_app_state::<AppState>()),
        ApiPath(1),
        ApiJson(player_request(1)),
    )
    .await;

    let resp = result.err().expect("player should be missing").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
