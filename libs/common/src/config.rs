//! Configuration module for the movie metadata provider and the gateway
//!
//! This module loads the provider credential, the provider base URL, the
//! ordered relay endpoints used when the provider is unreachable directly,
//! and the gateway bind address from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default provider API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Intermediary relay prefixes tried, in order, after a direct request
/// fails. A relay reaches the provider by appending the URL-encoded target
/// to its prefix.
pub const DEFAULT_RELAY_PREFIXES: [&str; 3] = [
    "https://cors-anywhere.herokuapp.com/",
    "https://api.codetabs.com/v1/proxy?quest=",
    "https://thingproxy.freeboard.io/fetch/",
];

/// Generic relay of last resort, always appended after the configured
/// relays.
pub const FALLBACK_RELAY_PREFIX: &str = "https://api.allorigins.win/raw?url=";

/// Provider configuration struct
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// Provider credential sent as the `api_key` query parameter
    pub api_key: String,
    /// Provider API root URL
    pub base_url: String,
    /// Ordered relay prefixes, the generic relay included last
    pub relay_prefixes: Vec<String>,
    /// Optional response language (e.g. "en-US")
    pub language: Option<String>,
}

impl TmdbConfig {
    /// Create a new TmdbConfig from environment variables
    ///
    /// `TMDB_API_KEY` is required; its absence is a hard configuration
    /// error and is never retried. `TMDB_BASE_URL`, `TMDB_RELAY_PREFIXES`
    /// (comma-separated) and `TMDB_LANGUAGE` are optional.
    pub fn from_env() -> ConfigResult<Self> {
        let api_key = env::var("TMDB_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url =
            env::var("TMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut relay_prefixes = match env::var("TMDB_RELAY_PREFIXES") {
            Ok(raw) => parse_relay_list(&raw)?,
            Err(_) => DEFAULT_RELAY_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        };
        relay_prefixes.push(FALLBACK_RELAY_PREFIX.to_string());

        let language = env::var("TMDB_LANGUAGE")
            .ok()
            .filter(|lang| !lang.trim().is_empty());

        Ok(Self {
            api_key,
            base_url,
            relay_prefixes,
            language,
        })
    }

    /// Build a TmdbConfig directly, for tests and embedding
    pub fn new(api_key: impl Into<String>) -> Self {
        let mut relay_prefixes: Vec<String> = DEFAULT_RELAY_PREFIXES
            .iter()
            .map(|prefix| prefix.to_string())
            .collect();
        relay_prefixes.push(FALLBACK_RELAY_PREFIX.to_string());

        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            relay_prefixes,
            language: None,
        }
    }
}

fn parse_relay_list(raw: &str) -> ConfigResult<Vec<String>> {
    let prefixes: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|prefix| !prefix.is_empty())
        .map(str::to_string)
        .collect();

    for prefix in &prefixes {
        if !prefix.starts_with("http://") && !prefix.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "relay prefix must be an absolute URL: {}",
                prefix
            )));
        }
    }

    Ok(prefixes)
}

/// Gateway server configuration struct
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP gateway binds to
    pub bind_addr: String,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let bind_addr =
            env::var("API_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self { bind_addr })
    }
}
