//! Typed client for the World of Warships public API.
//!
//! The client wraps the Wargaming REST endpoints used by Drydock: the ship and battle type
//! encyclopedia, account search & statistics, and clan membership & details. Every request
//! carries the configured application ID, every response envelope is checked for a
//! `status` of `"ok"`, and payloads are decoded into the models found in [`model`].
//!
//! ```no_run
//! # async fn example() -> Result<(), wows_api::Error> {
//! let config = wows_api::Config::builder().language("en").build()?;
//! let client = wows_api::Client::builder()
//!     .config(config)
//!     .application_id("your_application_id")
//!     .build()?;
//!
//! let accounts = client.account().search("Hyziri").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod model;

mod response;

pub use client::{Client, ClientBuilder};
pub use config::{Config, ConfigBuilder};
pub use error::Error;
