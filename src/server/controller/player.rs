use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, player::ProfileDto},
    server::{error::Error, model::app::AppState, service::profile::ProfileService},
};

pub static PLAYER_TAG: &str = "player";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayerSearchParams {
    /// Player name
    #[serde(default)]
    pub search: String,
}

/// Look up a player profile by name
///
/// Uses the first account matching the name. The clan is omitted when the player has no
/// clan or the clan could not be fetched.
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(PlayerSearchParams),
    responses(
        (status = 200, description = "Player profile with optional clan", body = ProfileDto),
        (status = 400, description = "Empty player name", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 502, description = "Player profile could not be fetched", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Query(params): Query<PlayerSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let profile_service = ProfileService::new(&state.api_client);

    let profile = profile_service.resolve(&params.search).await?;

    Ok((StatusCode::OK, Json(ProfileDto::from(profile))))
}
