//! Custom error types for the provider client

use thiserror::Error;

/// Custom error type for provider operations
#[derive(Error, Debug)]
pub enum TmdbError {
    /// The client is missing a usable credential
    #[error("Provider configuration error: {reason}")]
    Configuration {
        /// What is missing or unusable
        reason: String,
    },

    /// A delivery path failed at the network level
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// The provider answered with a non-success status
    #[error("Provider returned status {status}")]
    Api {
        /// The HTTP status code reported by the provider
        status: u16,
    },

    /// A success-status payload did not match the expected shape
    #[error("Malformed provider payload: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },

    /// Every delivery strategy in the fallback chain failed
    #[error("All delivery paths to the provider failed")]
    Exhausted {
        /// The failure reported by the last strategy tried
        #[source]
        last: Option<Box<TmdbError>>,
    },
}
