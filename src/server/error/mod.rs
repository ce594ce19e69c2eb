//! Error types for the Drydock server.
//!
//! Domain errors are defined with `thiserror`. Request-time errors are aggregated into
//! [`Error`], which handlers return so they can use `?`, and map to an HTTP status with an
//! [`ErrorDto`] body. [`config::ConfigError`] is only reported on startup.

pub mod config;
pub mod profile;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::profile::ResolutionError};

/// Main error type for the Drydock server.
#[derive(Error, Debug)]
pub enum Error {
    /// Player profile resolution failed.
    #[error(transparent)]
    ResolutionError(#[from] ResolutionError),
    /// World of Warships API error (transport, error envelope, client configuration).
    #[error(transparent)]
    ApiError(#[from] wows_api::Error),
    /// I/O error, e.g. binding the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 / 404 / 502 - For profile resolution failures, see [`ResolutionError`]
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ResolutionError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
