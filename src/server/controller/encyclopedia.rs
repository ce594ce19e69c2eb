use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        encyclopedia::{BattleTypeDto, BattleTypeListDto, ShipDto, ShipListDto},
    },
    server::{error::Error, model::app::AppState, service::encyclopedia::EncyclopediaService},
};

pub static ENCYCLOPEDIA_TAG: &str = "encyclopedia";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShipListParams {
    /// Case-insensitive substring of the ship name
    #[serde(default)]
    pub search: String,
    /// Exact nation, e.g. `japan`; empty or absent for every nation
    pub nation: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BattleTypeListParams {
    /// Case-insensitive substring of the battle type name
    #[serde(default)]
    pub search: String,
    /// Exact game mode; empty or absent for every game mode
    pub game_mode: Option<String>,
}

// Empty facet parameters are treated as absent
fn facet(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// List ships matching a name search and nation
#[utoipa::path(
    get,
    path = "/api/ships",
    tag = ENCYCLOPEDIA_TAG,
    params(ShipListParams),
    responses(
        (status = 200, description = "Matching ships and every nation of the catalog", body = ShipListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ships(
    State(state): State<AppState>,
    Query(params): Query<ShipListParams>,
) -> Result<impl IntoResponse, Error> {
    let encyclopedia_service = EncyclopediaService::new(&state.api_client);

    let ships = encyclopedia_service
        .list_ships(&params.search, facet(&params.nation))
        .await?;

    Ok((StatusCode::OK, Json(ships)))
}

/// Get a single ship
#[utoipa::path(
    get,
    path = "/api/ships/{ship_id}",
    tag = ENCYCLOPEDIA_TAG,
    params(("ship_id" = i64, Path, description = "Ship ID")),
    responses(
        (status = 200, description = "Ship details", body = ShipDto),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ship(
    State(state): State<AppState>,
    Path(ship_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let encyclopedia_service = EncyclopediaService::new(&state.api_client);

    match encyclopedia_service.get_ship(ship_id).await? {
        Some(ship) => Ok((StatusCode::OK, Json(ship)).into_response()),
        None => Ok(not_found("Ship not found")),
    }
}

/// List battle types matching a name search and game mode
#[utoipa::path(
    get,
    path = "/api/battle-types",
    tag = ENCYCLOPEDIA_TAG,
    params(BattleTypeListParams),
    responses(
        (status = 200, description = "Matching battle types and every game mode of the catalog", body = BattleTypeListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_battle_types(
    State(state): State<AppState>,
    Query(params): Query<BattleTypeListParams>,
) -> Result<impl IntoResponse, Error> {
    let encyclopedia_service = EncyclopediaService::new(&state.api_client);

    let battle_types = encyclopedia_service
        .list_battle_types(&params.search, facet(&params.game_mode))
        .await?;

    Ok((StatusCode::OK, Json(battle_types)))
}

/// Get a single battle type
#[utoipa::path(
    get,
    path = "/api/battle-types/{battle_type_id}",
    tag = ENCYCLOPEDIA_TAG,
    params(("battle_type_id" = String, Path, description = "Battle type key, e.g. PVP")),
    responses(
        (status = 200, description = "Battle type details", body = BattleTypeDto),
        (status = 404, description = "Battle type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battle_type(
    State(state): State<AppState>,
    Path(battle_type_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let encyclopedia_service = EncyclopediaService::new(&state.api_client);

    match encyclopedia_service.get_battle_type(&battle_type_id).await? {
        Some(battle_type) => Ok((StatusCode::OK, Json(battle_type)).into_response()),
        None => Ok(not_found("Battle type not found")),
    }
}
