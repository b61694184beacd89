use axum::{extract::State, http::StatusCode, response::IntoResponse};
use football_manager::{
    model::club::ClubDto,
    server::{
        controller::{
            club::{get_all_clubs, get_club},
            util::extract::ApiPath,
        },
        model::app::AppState,
    },
};

use super::*;

/// Expect 200 OK with the club
#[tokio::test]
async fn ok_for_existing_club() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_club("Arsenal", "Emirates")
        .build()
        .await?;

    let result = get_club(State(test.to_app_state::<AppState>()), ApiPath(1)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let club: ClubDto = read_json(resp).await?;
    assert_eq!(club.id, 1);
    assert_eq!(club.name, "Arsenal");

    Ok(())
}

/// Expect 404 Not Found for a club that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_club() -> Result<(), TestError> {
    let test = TestBuilder::new().with_football_tables().build().await?;

    let result = get_club(State(test.to_app_state::<AppState>()), ApiPath(1)).await;

    let resp = result.err().expect("club should be missing").into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK with every club ordered by ID
#[tokio::test]
async fn ok_with_all_clubs() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_football_tables()
        .with_club("Arsenal", "Emirates")
        .with_club("Chelsea", "Stamford Bridge")
        .build()
        .await?;

    let result = get_all_clubs(State(test.to_app_state::<AppState>())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let clubs: Vec<ClubDto> = read_json(resp).await?;
    let names: Vec<&str> = clubs.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Arsenal", "Chelsea"]);

    Ok(())
}
