//! Test configuration constants for the mock World of Warships API client.
//!
//! These are placeholder values, not real credentials.

/// User agent string for test API client requests.
pub static TEST_USER_AGENT: &str = "Drydock-Test/1.0 (contact@example.com)";

/// Application ID sent with every test request.
///
/// Every mock endpoint matches on this value, so a request that lost its application ID
/// does not match any mock.
pub static TEST_APPLICATION_ID: &str = "test_application_id";

/// Language the test client requests localized encyclopedia fields in.
pub static TEST_LANGUAGE: &str = "en";
