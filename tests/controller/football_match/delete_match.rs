use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::server::{
    controller::{football_match::delete_match, util::extract::ApiPath},
    model::app::AppState,
};

use super::*;

/// Expect 204 No Content for an existing match
#[tokio::test]
async fn no_content_for_existing_match() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (home, away, _, _) = test.football().insert_clubs_with_players().await?;
    let match_model = test.football().insert_match(home.id, away.id, 2, 1).await?;

    let result = delete_match(
        State(test.to_app_state::<AppState>()),
        ApiPath(match_model.id),
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

    let result = delete_match(State(test.to_app_state::<AppState>()), ApiPath(1)).await;

    let resp = result.err().expect("match should be missing").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
