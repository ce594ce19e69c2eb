//! Test utilities for Drydock.
//!
//! Tests are set up in two phases:
//!
//! 1. Declare the environment with [`TestBuilder`]: which World of Warships API
//!    endpoints the mock server should answer and how many times each is expected to be
//!    called.
//! 2. Run the code under test against the returned [`TestContext`], whose `api_client`
//!    points at the mock server, then verify calls with [`TestContext::assert_mocks`].

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::wows::factory, TestBuilder, TestContext, TestError};
}
