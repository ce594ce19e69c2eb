//! Server application core modules.
//!
//! This module contains the JSON API backing the Drydock front-end: HTTP routing,
//! configuration, the encyclopedia and player profile services, and the catalog filter
//! they share. All World of Warships data is fetched through the `wows-api` client.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
