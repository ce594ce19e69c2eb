//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response status codes and bodies, and the route table.

mod encyclopedia;
mod player;
mod router;

use drydock_test_utils::prelude::*;

use crate::util::TestContextExt;

/// Reads a response body as JSON
async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
