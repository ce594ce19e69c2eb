//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns a
//! mock World of Warships API server and an API client configured to talk to it.

use mockito::{Mock, Server, ServerGuard};

use crate::{
    constant::{TEST_APPLICATION_ID, TEST_LANGUAGE, TEST_USER_AGENT},
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_account_search_endpoint("Hyziri", vec![factory::mock_account_entry(1, "Hyziri")], 1)
///     .build()
///     .await?;
///
/// let accounts = test.api_client.account().search("Hyziri").await?;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// API client configured to use the mock server
    pub api_client: wows_api::Client,

    /// Mock HTTP server for World of Warships API endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Starts a mock server and builds an API client pointed at it.
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let config = wows_api::Config::builder()
            .api_url(&server.url())
            .language(TEST_LANGUAGE)
            .build()?;

        let api_client = wows_api::Client::builder()
            .config(config)
            .application_id(TEST_APPLICATION_ID)
            .user_agent(TEST_USER_AGENT)
            .build()?;

        Ok(Self {
            api_client,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
