//! World of Warships API mock endpoint creation utilities.
//!
//! Every endpoint matches the request path and the query parameters that identify the
//! request (always including the test application ID) and verifies it was called the
//! expected number of times when the context's mocks are asserted.

use mockito::{Matcher, Mock};
use serde_json::{Map, Value};
use wows_api::model::{
    account::{AccountInfo, AccountSearchEntry},
    clan::{ClanInfo, ClanMembership},
    encyclopedia::{BattleType, Ship},
};

use crate::{
    constant::{TEST_APPLICATION_ID, TEST_LANGUAGE},
    fixtures::wows::{
        factory::{error_envelope, ok_envelope},
        WowsFixtures,
    },
};

pub static SHIPS_PATH: &str = "/encyclopedia/ships/";
pub static BATTLE_TYPES_PATH: &str = "/encyclopedia/battletypes/";
pub static ACCOUNT_SEARCH_PATH: &str = "/account/list/";
pub static ACCOUNT_INFO_PATH: &str = "/account/info/";
pub static CLAN_MEMBERSHIP_PATH: &str = "/clans/accountinfo/";
pub static CLAN_INFO_PATH: &str = "/clans/info/";

fn query(params: &[(&str, String)]) -> Matcher {
    let mut matchers = vec![Matcher::UrlEncoded(
        "application_id".to_string(),
        TEST_APPLICATION_ID.to_string(),
    )];
    matchers.extend(
        params
            .iter()
            .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.clone())),
    );

    Matcher::AllOf(matchers)
}

fn keyed<T: serde::Serialize>(key: String, record: Option<T>) -> Value {
    let mut data = Map::new();
    data.insert(
        key,
        record.map_or(Value::Null, |record| serde_json::to_value(record).unwrap()),
    );

    Value::Object(data)
}

impl<'a> WowsFixtures<'a> {
    fn create_ok_endpoint(
        &mut self,
        path: &str,
        params: &[(&str, String)],
        data: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .match_query(query(params))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ok_envelope(data))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for the full ship catalog.
    ///
    /// Ships are returned in the given order, keyed by ship ID.
    ///
    /// # Arguments
    /// - `ships` - Ships to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_ships_endpoint(&mut self, ships: Vec<Ship>, expected_requests: usize) -> Mock {
        let mut data = Map::new();
        for ship in ships {
            data.insert(ship.ship_id.to_string(), serde_json::to_value(ship).unwrap());
        }

        self.create_ok_endpoint(
            SHIPS_PATH,
            &[("language", TEST_LANGUAGE.to_string())],
            Value::Object(data),
            expected_requests,
        )
    }

    /// Create a mock endpoint for a single ship.
    ///
    /// # Arguments
    /// - `ship_id` - Ship ID the request must ask for
    /// - `ship` - Ship to return, `None` returns a `null` record
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_ship_endpoint(
        &mut self,
        ship_id: i64,
        ship: Option<Ship>,
        expected_requests: usize,
    ) -> Mock {
        self.create_ok_endpoint(
            SHIPS_PATH,
            &[
                ("ship_id", ship_id.to_string()),
                ("language", TEST_LANGUAGE.to_string()),
            ],
            keyed(ship_id.to_string(), ship),
            expected_requests,
        )
    }

    /// Create a mock endpoint for the battle type catalog.
    pub fn create_battle_types_endpoint(
        &mut self,
        battle_types: Vec<BattleType>,
        expected_requests: usize,
    ) -> Mock {
        let mut data = Map::new();
        for battle_type in battle_types {
            data.insert(
                battle_type.id.clone(),
                serde_json::to_value(battle_type).unwrap(),
            );
        }

        self.create_ok_endpoint(
            BATTLE_TYPES_PATH,
            &[("language", TEST_LANGUAGE.to_string())],
            Value::Object(data),
            expected_requests,
        )
    }

    /// Create a mock endpoint for an account search.
    ///
    /// # Arguments
    /// - `search` - Search string the request must carry
    /// - `entries` - Matches to return, in order
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_account_search_endpoint(
        &mut self,
        search: &str,
        entries: Vec<AccountSearchEntry>,
        expected_requests: usize,
    ) -> Mock {
        self.create_ok_endpoint(
            ACCOUNT_SEARCH_PATH,
            &[("search", search.to_string())],
            serde_json::to_value(entries).unwrap(),
            expected_requests,
        )
    }

    /// Create a mock endpoint for account info.
    ///
    /// # Arguments
    /// - `account_id` - Account the request must ask for
    /// - `info` - Profile to return, `None` returns a `null` record
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_account_info_endpoint(
        &mut self,
        account_id: i64,
        info: Option<AccountInfo>,
        expected_requests: usize,
    ) -> Mock {
        self.create_ok_endpoint(
            ACCOUNT_INFO_PATH,
            &[("account_id", account_id.to_string())],
            keyed(account_id.to_string(), info),
            expected_requests,
        )
    }

    /// Create a mock endpoint for an account's clan membership.
    pub fn create_clan_membership_endpoint(
        &mut self,
        account_id: i64,
        membership: Option<ClanMembership>,
        expected_requests: usize,
    ) -> Mock {
        self.create_ok_endpoint(
            CLAN_MEMBERSHIP_PATH,
            &[("account_id", account_id.to_string())],
            keyed(account_id.to_string(), membership),
            expected_requests,
        )
    }

    /// Create a mock endpoint for clan details.
    pub fn create_clan_info_endpoint(
        &mut self,
        clan_id: i64,
        clan: Option<ClanInfo>,
        expected_requests: usize,
    ) -> Mock {
        self.create_ok_endpoint(
            CLAN_INFO_PATH,
            &[("clan_id", clan_id.to_string())],
            keyed(clan_id.to_string(), clan),
            expected_requests,
        )
    }

    /// Create a mock endpoint answering HTTP 200 with an API error envelope.
    ///
    /// The envelope's `field` is the request parameter the endpoint is keyed on, see
    /// [`error_field`].
    ///
    /// # Arguments
    /// - `path` - Endpoint path, e.g. [`ACCOUNT_SEARCH_PATH`]
    /// - `message` - Error message, e.g. `NOT_ENOUGH_SEARCH_LENGTH`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        message: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .match_query(query(&[]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(error_envelope(407, message, error_field(path)))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering HTTP 500.
    pub fn create_unavailable_endpoint(&mut self, path: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .match_query(query(&[]))
            .with_status(500)
            .with_body("Internal Server Error")
            .expect(expected_requests)
            .create()
    }
}

/// Request parameter an error envelope for `path` refers to.
pub fn error_field(path: &str) -> &'static str {
    match path {
        p if p == ACCOUNT_SEARCH_PATH => "search",
        p if p == ACCOUNT_INFO_PATH || p == CLAN_MEMBERSHIP_PATH => "account_id",
        p if p == CLAN_INFO_PATH => "clan_id",
        _ => "application_id",
    }
}
