//! HTTP gateway for the CineScope application
//!
//! Exposes movie search, popular listings, detail and trailer endpoints
//! backed by the provider client, so browser clients never talk to the
//! provider (or its relays) directly.

pub mod error;
pub mod models;
pub mod routes;
pub mod state;
