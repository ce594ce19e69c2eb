//! HTTP controller endpoints for the Drydock JSON API.
//!
//! Controllers parse query & path parameters, call the matching service and turn its
//! result into a JSON response. Every handler is annotated with utoipa for the OpenAPI
//! document served next to the Swagger UI.

pub mod encyclopedia;
pub mod player;
