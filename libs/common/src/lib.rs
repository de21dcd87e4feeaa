//! Common library for the CineScope application
//!
//! This crate provides shared functionality used across the CineScope
//! services: configuration loading for the movie metadata provider and
//! for the HTTP gateway, plus the configuration error types.

pub mod config;
pub mod error;

/// Example usage of the config module
///
/// ```rust,no_run
/// use common::config::{ServerConfig, TmdbConfig};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let tmdb = TmdbConfig::from_env()?;
///     let server = ServerConfig::from_env()?;
///     println!("Provider at {} with {} relay paths", tmdb.base_url, tmdb.relay_prefixes.len());
///     println!("Binding {}", server.bind_addr);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
