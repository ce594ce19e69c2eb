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
/// # Registered Endpoints
/// - `GET /api/ships` - Ship listing with search & nation filter
/// - `GET /api/ships/{ship_id}` - Ship details
/// - `GET /api/battle-types` - Battle type listing with search & game mode filter
/// - `GET /api/battle-types/{battle_type_id}` - Battle type details
/// - `GET /api/players` - Player profile lookup by name
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and the Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { api_client });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Drydock", description = "Drydock API"), tags(
        (name = controller::encyclopedia::ENCYCLOPEDIA_TAG, description = "Ship & battle type encyclopedia routes"),
        (name = controller::player::PLAYER_TAG, description = "Player profile routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::encyclopedia::list_ships))
        .routes(routes!(controller::encyclopedia::get_ship))
        .routes(routes!(controller::encyclopedia::list_battle_types))
        .routes(routes!(controller::encyclopedia::get_battle_type))
        .routes(routes!(controller::player::get_player))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
