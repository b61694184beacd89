//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so each path carries every method it
/// supports. The OpenAPI document is collected from the handler annotations.
///
/// # Registered Endpoints
/// - `POST/GET /api/club`, `GET/PUT/DELETE /api/club/{id}`, `GET /api/club/{id}/players`
/// - `POST/GET /api/player`, `GET/PUT/DELETE /api/player/{id}`,
///   `POST /api/player/{id}/transfer`
/// - `POST/GET /api/match`, `GET/DELETE /api/match/{id}`, `POST /api/match/{id}/results`
/// - `GET /api/statistics/club-rankings`, `GET /api/statistics/player-statistics`
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Football Manager", description = "Football Manager API"), tags(
        (name = controller::club::CLUB_TAG, description = "Club API routes"),
        (name = controller::player::PLAYER_TAG, description = "Player API routes"),
        (name = controller::football_match::MATCH_TAG, description = "Match API routes"),
        (name = controller::statistics::STATISTICS_TAG, description = "League statistics API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::club::create_club,
            controller::club::get_all_clubs
        ))
        .routes(routes!(
            controller::club::get_club,
            controller::club::update_club,
            controller::club::delete_club
        ))
        .routes(routes!(controller::club::get_players_of_club))
        .routes(routes!(
            controller::player::create_player,
            controller::player::get_all_players
        ))
        .routes(routes!(
            controller::player::get_player,
            controller::player::update_player,
            controller::player::delete_player
        ))
        .routes(routes!(controller::player::transfer_player))
        .routes(routes!(
            controller::football_match::schedule_match,
            controller::football_match::get_all_matches
        ))
        .routes(routes!(
            controller::football_match::get_match,
            controller::football_match::delete_match
        ))
        .routes(routes!(controller::football_match::record_match_result))
        .routes(routes!(controller::statistics::get_club_rankings))
        .routes(routes!(controller::statistics::get_player_statistics))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
