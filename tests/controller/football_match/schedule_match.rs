use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::{
    model::football_match::MatchDto,
    server::{
        controller::{football_match::schedule_match, util::extract::ApiJson},
        model::app::AppState,
    },
};

use super::*;

/// Expect 201 Created with both clubs in the body
#[tokio::test]
async fn created_with_match_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_club("Arsenal", "Emirates")
        .with_club("Chelsea", "Stamford Bridge")
        .build()
        .await?;

    let result = schedule_match(
        State(test.to_app_state::<AppState>()),
        ApiJson(fixture(1, 2)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let football_match: MatchDto = read_json(resp).await?;
    assert_eq!(football_match.home_club.name, "Arsenal");
    assert_eq!(football_match.away_club.name, "Chelsea");
    assert!(football_match.events.is_empty());

    Ok(())
}

/// Expect 400 Bad Request when a club would play itself
#[tokio::test]
async fn bad_request_for_same_club() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_club("Arsenal", "Emirates")
        .build()
        .await?;

    let result = schedule_match(
        State(test.to_app_state::<AppState>()),
        ApiJson(fixture(1, 1)),
    )
    .await;

    let resp = result.err().expect("same club should fail").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request when a club does not exist
#[tokio::test]
async fn bad_request_for_nonexistent_club() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_club("Arsenal", "Emirates")
        .build()
        .await?;

    let result = schedule_match(
        State(test.to_app_state::<AppState>()),
        ApiJson(fixture(1, 2)),
    )
    .await;

    let resp = result.err().expect("unknown club should fail").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
