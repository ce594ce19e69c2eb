//! Drydock: World of Warships encyclopedia browser and player profile lookup.
//!
//! The library exposes the JSON API consumed by the Drydock front-end. See [`server`] for
//! the HTTP layer and services, and [`model`] for the response DTOs.

pub mod model;
pub mod server;
