//! Data transfer objects returned by the JSON API.

pub mod api;
pub mod encyclopedia;
pub mod player;
