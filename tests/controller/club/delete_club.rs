use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::server::{
    controller::{club::delete_club, util::extract::ApiPath},
    model::app::AppState,
};

use super::*;

/// Expect 204 No Content for an existing club
#[tokio::test]
async fn no_content_for_existing_club() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_club("Arsenal", "Emirates")
        .build()
        .await?;

    let result = delete_club(State(test.to_app_state::<AppState>()), ApiPath(1)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 404 Not Found for a club that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_club() -> Result<(), TestError> {
    let test = TestBuilder::new().with_football_tables().build().await?;

    let result = delete_club(State(test.to_app_state::<AppState>()), ApiPath(1)).await;

    let resp = result.err().expect("club should be missing").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 Bad Request while the club is referenced by a match
#[tokio::test]
async fn bad_request_for_club_with_matches() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (home, away, _, _) = test.football().insert_clubs_with_players().await?;
    test.football().insert_match(home.id, away.id, 1, 0).await?;

    let result = delete_club(State(test.to_app_state::<AppState>()), ApiPath(home.id)).await;

    let resp = result
        .err()
        .expect("referenced club should not be deleted")
        .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
