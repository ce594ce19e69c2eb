//! Utility functions shared by the server's services.
//!
//! This module provides pure helpers with no I/O, such as the catalog search & facet
//! filter used by the encyclopedia listings.

pub mod catalog;
