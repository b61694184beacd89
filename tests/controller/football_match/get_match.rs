use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::{
    model::football_match::MatchDto,
    server::{
        controller::{
            football_match::{get_all_matches, get_match},
            util::extract::ApiPath,
        },
        model::app::AppState,
    },
};

use super::*;

/// Expect 200 OK with the match and its events
#[tokio::test]
async fn ok_with_match_details() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (home, away, home_player, _) = test.football().insert_clubs_with_players().await?;
    let match_model = test.football().insert_match(home.id, away.id, 1, 0).await?;
    test.football()
        .insert_event(match_model.id, home_player.id, "goal")
        .await?;

    let result = get_match(
        State(test.to_app_state::<AppState>()),
        ApiPath(match_model.id),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let football_match: MatchDto = read_json(resp).await?;
    assert_eq!(football_match.home_goals, 1);
    assert_eq!(football_match.events.len(), 1);
    assert_eq!(football_match.events[0].event_type, "goal");

    Ok(())
}

/// Expect 404 Not Found for a match that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_match() -> Result<(), TestError> {
    let test = TestBuilder::new().with_football_tables().build().await?;

    let result = get_match(State(test.to_app_state::<AppState>()), ApiPath(1)).await;

    let resp = result.err().expect("match should be missing").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK with every match
#[tokio::test]
async fn ok_with_all_matches() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (home, away, _, _) = test.football().insert_clubs_with_players().await?;
    test.football().insert_match(home.id, away.id, 1, 0).await?;
    test.football().insert_match(away.id, home.id, 3, 3).await?;

    let result = get_all_matches(State(test.to_app_state::<AppState>())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let matches: Vec<MatchDto> = read_json(resp).await?;
    assert_eq!(matches.len(), 2);

    Ok(())
}
