//! Provider client
//!
//! Owns the provider configuration and the fallback transport. Endpoint
//! operations live in the `search` and `movie` modules.

use common::config::TmdbConfig;

use crate::Result;
use crate::error::TmdbError;
use crate::transport::FallbackTransport;

/// Client for a TMDB-compatible movie metadata provider
#[derive(Debug)]
pub struct TmdbClient {
    transport: FallbackTransport,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Create a client whose transport chain is derived from the
    /// configuration (direct path plus the configured relays)
    pub fn new(config: TmdbConfig) -> Self {
        let transport = FallbackTransport::from_config(&config);
        Self { transport, config }
    }

    /// Create a client over an explicit transport, for tests
    pub fn with_transport(config: TmdbConfig, transport: FallbackTransport) -> Self {
        Self { transport, config }
    }

    pub(crate) fn transport(&self) -> &FallbackTransport {
        &self.transport
    }

    /// Build a provider URL for an endpoint path plus query parameters
    ///
    /// The credential is checked here: an empty key is a configuration
    /// error and no request is attempted.
    pub(crate) fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<String> {
        let api_key = self.credential()?;

        let mut url = format!(
            "{}{}?api_key={}",
            self.config.base_url,
            path,
            urlencoding::encode(api_key)
        );
        if let Some(language) = &self.config.language {
            url.push_str("&language=");
            url.push_str(&urlencoding::encode(language));
        }
        for (key, value) in params {
            url.push_str("&");
            url.push_str(key);
            url.push_str("=");
            url.push_str(&urlencoding::encode(value));
        }

        Ok(url)
    }

    fn credential(&self) -> Result<&str> {
        let api_key = self.config.api_key.trim();
        if api_key.is_empty() {
            return Err(TmdbError::Configuration {
                reason: "TMDB API key not configured".to_string(),
            });
        }
        Ok(api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_carries_credential_and_params() {
        let client = TmdbClient::new(TmdbConfig::new("test-key"));
        let url = client
            .url("/search/movie", &[("query", "the matrix"), ("page", "2")])
            .expect("url should build");

        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?api_key=test-key&query=the%20matrix&page=2"
        );
    }

    #[test]
    fn test_url_includes_language_when_configured() {
        let mut config = TmdbConfig::new("test-key");
        config.language = Some("en-US".to_string());
        let client = TmdbClient::new(config);
        let url = client.url("/movie/603", &[]).expect("url should build");

        assert_eq!(
            url,
            "https://api.themoviedb.org/3/movie/603?api_key=test-key&language=en-US"
        );
    }

    #[test]
    fn test_blank_credential_is_a_configuration_error() {
        let client = TmdbClient::new(TmdbConfig::new("  "));
        let result = client.url("/movie/603", &[]);
        assert!(matches!(result, Err(TmdbError::Configuration { .. })));
    }
}
