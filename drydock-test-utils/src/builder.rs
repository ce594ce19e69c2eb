//! Declarative test builder for Phase 1 setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Endpoint declarations are queued and only registered with the mock server
//! during the final `build()` call.

use mockito::Mock;
use wows_api::model::{
    account::{AccountInfo, AccountSearchEntry},
    clan::{ClanInfo, ClanMembership},
    encyclopedia::{BattleType, Ship},
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Collects the World of Warships API endpoints a test needs, then `build()` starts the
/// mock server, registers every endpoint and returns a [`TestContext`] whose client talks
/// to it.
pub struct TestBuilder {
    // Custom mock endpoints
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    ships_endpoints: Vec<(Vec<Ship>, usize)>, // (ships, expected_requests)
    ship_endpoints: Vec<(i64, Option<Ship>, usize)>,
    battle_types_endpoints: Vec<(Vec<BattleType>, usize)>,
    account_search_endpoints: Vec<(String, Vec<AccountSearchEntry>, usize)>,
    account_info_endpoints: Vec<(i64, Option<AccountInfo>, usize)>,
    clan_membership_endpoints: Vec<(i64, Option<ClanMembership>, usize)>,
    clan_info_endpoints: Vec<(i64, Option<ClanInfo>, usize)>,
    error_endpoints: Vec<(String, String, usize)>, // (path, message, expected_requests)
    unavailable_endpoints: Vec<(String, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            ships_endpoints: Vec::new(),
            ship_endpoints: Vec::new(),
            battle_types_endpoints: Vec::new(),
            account_search_endpoints: Vec::new(),
            account_info_endpoints: Vec::new(),
            clan_membership_endpoints: Vec::new(),
            clan_info_endpoints: Vec::new(),
            error_endpoints: Vec::new(),
            unavailable_endpoints: Vec::new(),
        }
    }

    /// Add mock ship catalog endpoint to the test server.
    ///
    /// # Arguments
    /// - `ships` - Ships to return, in catalog order
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_ships_endpoint(mut self, ships: Vec<Ship>, expected_requests: usize) -> Self {
        self.ships_endpoints.push((ships, expected_requests));
        self
    }

    /// Add mock single ship endpoint to the test server.
    ///
    /// Do not combine with [`with_ships_endpoint`](Self::with_ships_endpoint) in one test,
    /// both are served from the same path.
    ///
    /// # Arguments
    /// - `ship_id` - Ship ID the request must ask for
    /// - `ship` - Ship to return, `None` for an unknown ship
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_ship_endpoint(
        mut self,
        ship_id: i64,
        ship: Option<Ship>,
        expected_requests: usize,
    ) -> Self {
        self.ship_endpoints.push((ship_id, ship, expected_requests));
        self
    }

    /// Add mock battle type catalog endpoint to the test server.
    pub fn with_battle_types_endpoint(
        mut self,
        battle_types: Vec<BattleType>,
        expected_requests: usize,
    ) -> Self {
        self.battle_types_endpoints
            .push((battle_types, expected_requests));
        self
    }

    /// Add mock account search endpoint to the test server.
    ///
    /// # Arguments
    /// - `search` - Search string the request must carry
    /// - `entries` - Matches to return, in order
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_account_search_endpoint(
        mut self,
        search: impl Into<String>,
        entries: Vec<AccountSearchEntry>,
        expected_requests: usize,
    ) -> Self {
        self.account_search_endpoints
            .push((search.into(), entries, expected_requests));
        self
    }

    /// Add mock account info endpoint to the test server.
    pub fn with_account_info_endpoint(
        mut self,
        account_id: i64,
        info: Option<AccountInfo>,
        expected_requests: usize,
    ) -> Self {
        self.account_info_endpoints
            .push((account_id, info, expected_requests));
        self
    }

    /// Add mock clan membership endpoint to the test server.
    pub fn with_clan_membership_endpoint(
        mut self,
        account_id: i64,
        membership: Option<ClanMembership>,
        expected_requests: usize,
    ) -> Self {
        self.clan_membership_endpoints
            .push((account_id, membership, expected_requests));
        self
    }

    /// Add mock clan info endpoint to the test server.
    pub fn with_clan_info_endpoint(
        mut self,
        clan_id: i64,
        clan: Option<ClanInfo>,
        expected_requests: usize,
    ) -> Self {
        self.clan_info_endpoints
            .push((clan_id, clan, expected_requests));
        self
    }

    /// Add an endpoint answering with an API error envelope.
    ///
    /// # Arguments
    /// - `path` - Endpoint path, see [`crate::fixtures::wows::mockito`]
    /// - `message` - Error message in the envelope
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_error_endpoint(
        mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.error_endpoints
            .push((path.into(), message.into(), expected_requests));
        self
    }

    /// Add an endpoint answering with HTTP 500.
    pub fn with_unavailable_endpoint(
        mut self,
        path: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.unavailable_endpoints
            .push((path.into(), expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by starting the mock server and creating all endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::ApiError)` - Mock API client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // Custom endpoints are created first so tests can stack several mocks on one path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (ships, expected) in self.ships_endpoints {
            mocks.push(setup.wows().create_ships_endpoint(ships, expected));
        }

        for (ship_id, ship, expected) in self.ship_endpoints {
            mocks.push(setup.wows().create_ship_endpoint(ship_id, ship, expected));
        }

        for (battle_types, expected) in self.battle_types_endpoints {
            mocks.push(
                setup
                    .wows()
                    .create_battle_types_endpoint(battle_types, expected),
            );
        }

        for (search, entries, expected) in self.account_search_endpoints {
            mocks.push(
                setup
                    .wows()
                    .create_account_search_endpoint(&search, entries, expected),
            );
        }

        for (account_id, info, expected) in self.account_info_endpoints {
            mocks.push(
                setup
                    .wows()
                    .create_account_info_endpoint(account_id, info, expected),
            );
        }

        for (account_id, membership, expected) in self.clan_membership_endpoints {
            mocks.push(
                setup
                    .wows()
                    .create_clan_membership_endpoint(account_id, membership, expected),
            );
        }

        for (clan_id, clan, expected) in self.clan_info_endpoints {
            mocks.push(setup.wows().create_clan_info_endpoint(clan_id, clan, expected));
        }

        for (path, message, expected) in self.error_endpoints {
            mocks.push(setup.wows().create_error_endpoint(&path, &message, expected));
        }

        for (path, expected) in self.unavailable_endpoints {
            mocks.push(setup.wows().create_unavailable_endpoint(&path, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
