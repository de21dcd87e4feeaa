//! Fallback transport for reaching the provider
//!
//! The provider may be unreachable directly from some network contexts,
//! so a request is attempted through an ordered chain of delivery
//! strategies: a direct request first, then each configured relay in
//! priority order, then a generic relay of last resort. The first
//! strategy that yields a success-status, parseable payload wins; each
//! call restarts the full chain, with no backoff and no state carried
//! across calls.

use async_trait::async_trait;
use bytes::Bytes;
use common::config::TmdbConfig;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::Result;
use crate::error::TmdbError;

/// A transport-level response from one delivery strategy
///
/// Success is judged by `status` alone; a strategy that returns a body
/// with a non-success status has still failed.
#[derive(Debug, Clone)]
pub struct Delivered {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Trait for delivery paths to the provider
///
/// Implementations route a GET request to the target URL through one
/// particular path (direct connection, a relay endpoint, a mock in
/// tests).
#[async_trait]
pub trait DeliveryStrategy: Send + Sync + std::fmt::Debug {
    /// Short human-readable name used in logs
    fn name(&self) -> &str;

    /// Issue the request through this path
    ///
    /// # Errors
    /// - `TmdbError::Network` - The request did not complete
    async fn deliver(&self, target: &str) -> Result<Delivered>;
}

/// Direct request to the target URL
#[derive(Debug, Clone)]
pub struct DirectStrategy {
    client: Client,
}

impl DirectStrategy {
    /// Create a direct strategy over a shared reqwest client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeliveryStrategy for DirectStrategy {
    fn name(&self) -> &str {
        "direct"
    }

    async fn deliver(&self, target: &str) -> Result<Delivered> {
        fetch(&self.client, target).await
    }
}

/// Request routed through an intermediary relay endpoint
///
/// The relay reaches the provider by appending the URL-encoded target to
/// its prefix.
#[derive(Debug, Clone)]
pub struct RelayStrategy {
    client: Client,
    prefix: String,
}

impl RelayStrategy {
    /// Create a relay strategy for one relay prefix
    pub fn new(client: Client, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: prefix.into(),
        }
    }

    /// The relay-side URL for a target
    pub fn relay_url(&self, target: &str) -> String {
        format!("{}{}", self.prefix, urlencoding::encode(target))
    }
}

#[async_trait]
impl DeliveryStrategy for RelayStrategy {
    fn name(&self) -> &str {
        &self.prefix
    }

    async fn deliver(&self, target: &str) -> Result<Delivered> {
        fetch(&self.client, &self.relay_url(target)).await
    }
}

async fn fetch(client: &Client, url: &str) -> Result<Delivered> {
    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| TmdbError::Network {
            reason: e.to_string(),
        })?;

    let status = response.status();
    let body = response.bytes().await.map_err(|e| TmdbError::Network {
        reason: e.to_string(),
    })?;

    Ok(Delivered { status, body })
}

/// Ordered chain of delivery strategies
#[derive(Debug)]
pub struct FallbackTransport {
    strategies: Vec<Box<dyn DeliveryStrategy>>,
}

impl FallbackTransport {
    /// Build the chain from provider configuration: direct first, then
    /// each relay prefix in its configured order
    pub fn from_config(config: &TmdbConfig) -> Self {
        let client = Client::new();

        let mut strategies: Vec<Box<dyn DeliveryStrategy>> =
            vec![Box::new(DirectStrategy::new(client.clone()))];
        for prefix in &config.relay_prefixes {
            strategies.push(Box::new(RelayStrategy::new(client.clone(), prefix)));
        }

        Self { strategies }
    }

    /// Build a chain from explicit strategies, for tests and embedding
    pub fn new(strategies: Vec<Box<dyn DeliveryStrategy>>) -> Self {
        Self { strategies }
    }

    /// Fetch and deserialize a JSON payload from the target URL
    ///
    /// Strategies are tried in order. A network failure, a non-success
    /// status, or a payload that fails to parse all advance the chain to
    /// the next strategy; the first parseable success payload is
    /// returned immediately and the remaining strategies are skipped.
    ///
    /// # Errors
    /// - `TmdbError::Exhausted` - Every strategy in the chain failed; the
    ///   last strategy's failure is attached as the source
    pub async fn fetch_json<T: DeserializeOwned>(&self, target: &str) -> Result<T> {
        let mut last_failure = None;

        for strategy in &self.strategies {
            let delivered = match strategy.deliver(target).await {
                Ok(delivered) => delivered,
                Err(e) => {
                    tracing::debug!("Delivery via {} failed: {}", strategy.name(), e);
                    last_failure = Some(e);
                    continue;
                }
            };

            if !delivered.status.is_success() {
                let e = TmdbError::Api {
                    status: delivered.status.as_u16(),
                };
                tracing::debug!("Delivery via {} failed: {}", strategy.name(), e);
                last_failure = Some(e);
                continue;
            }

            match serde_json::from_slice::<T>(&delivered.body) {
                Ok(payload) => return Ok(payload),
                Err(e) => {
                    // Relays sometimes return their own HTML error pages
                    // with a 200 status; treat that as a failed path.
                    let e = TmdbError::Parse {
                        reason: e.to_string(),
                    };
                    tracing::debug!(
                        "Payload from {} failed to parse: {}",
                        strategy.name(),
                        e
                    );
                    last_failure = Some(e);
                    continue;
                }
            }
        }

        tracing::warn!("All delivery paths to {} failed", target);
        Err(TmdbError::Exhausted {
            last: last_failure.map(Box::new),
        })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted delivery strategies for tests

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// What a scripted strategy should do when asked to deliver
    #[derive(Debug, Clone)]
    pub enum Script {
        /// Fail at the network level
        NetworkError,
        /// Return this status and body
        Respond(u16, &'static str),
    }

    /// Delivery strategy that replays a fixed script and counts calls
    #[derive(Debug)]
    pub struct ScriptedStrategy {
        name: &'static str,
        script: Script,
        pub calls: Arc<AtomicUsize>,
    }

    impl ScriptedStrategy {
        pub fn new(name: &'static str, script: Script) -> Self {
            Self {
                name,
                script,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn call_count(calls: &Arc<AtomicUsize>) -> usize {
            calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DeliveryStrategy for ScriptedStrategy {
        fn name(&self) -> &str {
            self.name
        }

        async fn deliver(&self, _target: &str) -> Result<Delivered> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            run_script(&self.script)
        }
    }

    /// Delivery strategy that picks a script by substring of the target
    /// URL, so one chain can answer several endpoints
    #[derive(Debug)]
    pub struct RoutedStrategy {
        routes: Vec<(&'static str, Script)>,
        pub calls: Arc<AtomicUsize>,
    }

    impl RoutedStrategy {
        pub fn new(routes: Vec<(&'static str, Script)>) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                routes,
            }
        }
    }

    #[async_trait]
    impl DeliveryStrategy for RoutedStrategy {
        fn name(&self) -> &str {
            "routed"
        }

        async fn deliver(&self, target: &str) -> Result<Delivered> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let script = self
                .routes
                .iter()
                .find(|(fragment, _)| target.contains(fragment))
                .map(|(_, script)| script)
                .expect("no scripted route for target");
            run_script(script)
        }
    }

    fn run_script(script: &Script) -> Result<Delivered> {
        match script {
            Script::NetworkError => Err(TmdbError::Network {
                reason: "connection refused".to_string(),
            }),
            Script::Respond(status, body) => Ok(Delivered {
                status: StatusCode::from_u16(*status).expect("valid status in script"),
                body: Bytes::from_static(body.as_bytes()),
            }),
        }
    }
}
