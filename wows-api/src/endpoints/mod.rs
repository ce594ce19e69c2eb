//! Endpoint groups exposed through [`Client`](crate::Client).

pub mod account;
pub mod clan;
pub mod encyclopedia;
