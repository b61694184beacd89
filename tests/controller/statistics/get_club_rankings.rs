use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::{
    model::statistics::ClubStatisticsDto,
    server::{controller::statistics::get_club_rankings, model::app::AppState},
};

use super::*;

/// Expect 200 OK with clubs ordered by points
#[tokio::test]
async fn ok_with_ranked_clubs() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_football_tables().build().await?;
    let (home, away, _, _) = test.football().insert_clubs_with_players().await?;
    test.football().insert_match(home.id, away.id, 0, 3).await?;

    let result = get_club_rankings(State(test.to_app_state::<AppState>())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let rankings: Vec<ClubStatisticsDto> = read_json(resp).await?;
    assert_eq!(rankings.len(), 2);
    assert_eq!(rankings[0].club.id, away.id);
    assert_eq!(rankings[0].points, 3);
    assert_eq!(rankings[1].club.id, home.id);
    assert_eq!(rankings[1].points, 0);

    Ok(())
}
