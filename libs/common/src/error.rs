//! Custom error types for the common library
//!
//! This module defines the configuration error types shared by the
//! CineScope services.

use thiserror::Error;

/// Custom error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The provider credential is absent or empty
    #[error("TMDB API key not configured (set TMDB_API_KEY)")]
    MissingApiKey,

    /// A configuration value is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
