use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::server::{
    controller::{
        player::transfer_player,
        util::extract::{ApiJson, ApiPath},
    },
    model::app::AppState,
};

use super::*;

/// Expect 204 No Content when both player and club exist
#[tokio::test]
async fn no_content_for_valid_transfer() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (_, away, home_player, _) = test.football().insert_clubs_with_players().await?;

    let result = transfer_player(
        State(test.to_app_state::<AppState>()),
        ApiPath(home_player.id),
        ApiJson(away.id),
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

    let result = transfer_player(
        State(test.to_app_state::<AppState>()),
        ApiPath(1),
        ApiJson(1),
    )
    .await;

    let resp = result.err().expect("player should be missing").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found for a club that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_club() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (_, away, home_player, _) = test.football().insert_clubs_with_players().await?;

    let result = transfer_player(
        State(test.to_app_state::<AppState>()),
        ApiPath(home_player.id),
        ApiJson(away.id + 1),
    )
    .await;

    let resp = result.err().expect("club should be missing").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
