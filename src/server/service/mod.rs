//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the World of Warships API client. The
//! encyclopedia service fetches catalogs and applies search & facet filters; the profile
//! service resolves a player name into a profile with an optional clan.

pub mod encyclopedia;
pub mod profile;
