//! Test fixture modules for mock World of Warships API endpoints.
//!
//! - `wows` - Fixture data factories and mock endpoint creation for every endpoint the
//!   API client talks to

pub mod wows;
