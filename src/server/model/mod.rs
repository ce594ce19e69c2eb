//! Server application models.
//!
//! Application state shared by the handlers and the intermediate records produced by the
//! services before they are turned into DTOs.

pub mod app;
pub mod profile;
