//! Wire models decoded from World of Warships API responses.
//!
//! Fields the API may omit are modelled as `Option` or carry `#[serde(default)]`, so a
//! missing field is a declared part of each schema rather than a decoding failure.

pub mod account;
pub mod clan;
pub mod encyclopedia;
