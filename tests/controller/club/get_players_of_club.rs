use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::{
    model::{api::ErrorDto, player::PlayerDto},
    server::{
        controller::{club::get_players_of_club, util::extract::ApiPath},
        model::app::AppState,
    },
};

use super::*;

/// Expect 200 OK with only the club's players
#[tokio::test]
async fn ok_with_club_players() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (home, _, home_player, _) = test.football().insert_clubs_with_players().await?;

    let result =
        get_players_of_club(State(test.to_app_state::<AppState>()), ApiPath(home.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let players: Vec<PlayerDto> = read_json(resp).await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, home_player.id);

    Ok(())
}

/// Expect 404 Not Found when the club has no players
#[tokio::test]
async fn not_found_for_club_without_players() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_club("Arsenal", "Emirates")
        .build()
        .await?;

    let result = get_players_of_club(State(test.to_app_state::<AppState>()), ApiPath(1)).await;

    let resp = result.err().expect("empty squad should be 404").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = read_json(resp).await?;
    assert_eq!(body.error, "No players found for club ID 1");

    Ok(())
}

/// Expect 404 Not Found naming the club when it does not exist
#[tokio::test]
async fn not_found_for_nonexistent_club() -> Result<(), TestError> {
    let test = TestBuilder::new().with_football_tables().build().await?;

    let result = get_players_of_club(State(test.to_app_state::<AppState>()), ApiPath(1)).await;

    let resp = result.err().expect("club should be missing").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = read_json(resp).await?;
    assert_eq!(body.error, "Club ID 1 not found");

    Ok(())
}
