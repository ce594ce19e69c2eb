//! Error type returned by every client operation.

use thiserror::Error;

/// Errors produced while configuring the client or talking to the World of Warships API.
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with an envelope whose `status` was not `"ok"`.
    ///
    /// Wargaming reports application errors (invalid application ID, search string too
    /// short, request limit exceeded, ...) with HTTP 200 and an error envelope, so this is
    /// the usual failure for a well-formed request the API refused.
    #[error("World of Warships API request to {path} failed with code {code:?}: {message}")]
    Api {
        /// Endpoint path the request was sent to
        path: String,
        /// Numeric error code from the envelope, if provided
        code: Option<u16>,
        /// Error message from the envelope, e.g. `INVALID_APPLICATION_ID`
        message: String,
        /// Request field the error refers to, if provided
        field: Option<String>,
    },
    /// The API reported success but the envelope did not contain any data.
    #[error("World of Warships API response from {0} did not contain any data")]
    MissingData(String),
    /// The client or its configuration could not be built.
    #[error("Invalid World of Warships API client configuration: {0}")]
    InvalidConfig(String),
    /// Transport failure, timeout, non-success HTTP status or undecodable body.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
