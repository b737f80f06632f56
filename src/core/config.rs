//! Resolver configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::errors::{PolyglotError, Result};
use crate::core::providers::{
    default_primary_endpoints, default_secondary_endpoint, ProviderEndpoint,
};

/// Default per-request timeout. The upstream services set none, which
/// lets a stalled mirror hang the whole chain; a timeout turns that
/// into a transport failure the fallback loop already absorbs.
const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Configuration for the translation resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Primary-family endpoints, tried in order
    pub primary_endpoints: Vec<ProviderEndpoint>,
    /// Secondary endpoint, tried once after the primary family
    pub secondary_endpoint: ProviderEndpoint,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            primary_endpoints: default_primary_endpoints(),
            secondary_endpoint: default_secondary_endpoint(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ResolverConfig {
    /// Load configuration from environment variables
    ///
    /// `TRANSLATE_ENDPOINT` prepends a custom primary endpoint ahead of
    /// the built-in family; `REQUEST_TIMEOUT_MS` overrides the timeout.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("TRANSLATE_ENDPOINT") {
            if !endpoint.is_empty() {
                config
                    .primary_endpoints
                    .insert(0, ProviderEndpoint::new("custom", endpoint));
            }
        }

        if let Ok(raw) = std::env::var("REQUEST_TIMEOUT_MS") {
            config.timeout_ms = raw.parse::<u64>().map_err(|_| PolyglotError::Config {
                message: format!("REQUEST_TIMEOUT_MS must be an integer, got '{}'", raw),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(PolyglotError::Config {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        if self.primary_endpoints.is_empty() {
            warn!("No primary endpoints configured, every resolve will go straight to the secondary provider");
        }

        for endpoint in self
            .primary_endpoints
            .iter()
            .chain(std::iter::once(&self.secondary_endpoint))
        {
            if endpoint.url.is_empty() {
                return Err(PolyglotError::Config {
                    message: format!("Endpoint '{}' has an empty URL", endpoint.id),
                });
            }
        }

        Ok(())
    }
}
