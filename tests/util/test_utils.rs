//! Test utilities for creating AppState from a test context

use drydock::server::model::app::AppState;
use drydock_test_utils::TestContext;

/// Extension trait for TestContext to create AppState backed by the mock API server
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            api_client: self.api_client.clone(),
        }
    }
}
