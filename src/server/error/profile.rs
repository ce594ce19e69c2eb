use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of a player profile resolution.
///
/// Clan lookups never fail a resolution, so there is no clan variant.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The player name was empty after trimming; no request was sent.
    #[error("Player name query is empty")]
    EmptyQuery,
    /// The account search returned no matches.
    #[error("No player found matching {0:?}")]
    NotFound(String),
    /// The account search or the account info request failed, or the account info was missing.
    #[error("Profile of {query:?} is unavailable: {reason}")]
    ProfileUnavailable { query: String, reason: String },
}

impl ResolutionError {
    /// Message shown to the player
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "Please enter a player name",
            Self::NotFound(_) => "Player not found",
            Self::ProfileUnavailable { .. } => "Error searching player. Please try again.",
        }
    }
}

/// # Returns
/// - 400 Bad Request - Empty query
/// - 404 Not Found - No matching player
/// - 502 Bad Gateway - The World of Warships API could not provide the profile
impl IntoResponse for ResolutionError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::EmptyQuery => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ProfileUnavailable { .. } => {
                tracing::error!("{}", self);

                StatusCode::BAD_GATEWAY
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.user_message().to_string(),
            }),
        )
            .into_response()
    }
}
