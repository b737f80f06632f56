//! Remote translation provider endpoints

use serde::{Deserialize, Serialize};

/// A remote translation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoint {
    /// Short identifier reported in results and logs
    pub id: String,
    /// Full request URL
    pub url: String,
}

impl ProviderEndpoint {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// Primary provider family: canonical instance first, then mirrors.
/// Order is the fallback order.
const PRIMARY_ENDPOINTS: &[(&str, &str)] = &[
    ("libretranslate.com", "https://libretranslate.com/translate"),
    ("libretranslate.de", "https://libretranslate.de/translate"),
    ("translate.terraprint.co", "https://translate.terraprint.co/translate"),
    (
        "libretranslate.pussthecat.org",
        "https://libretranslate.pussthecat.org/translate",
    ),
];

/// Secondary provider, different wire shape, tried once after the
/// primary family is exhausted
const SECONDARY_ENDPOINT: (&str, &str) = ("mymemory", "https://api.mymemory.translated.net/get");

/// Default primary-family endpoints in fallback order
pub fn default_primary_endpoints() -> Vec<ProviderEndpoint> {
    PRIMARY_ENDPOINTS
        .iter()
        .map(|(id, url)| ProviderEndpoint::new(*id, *url))
        .collect()
}

/// Default secondary endpoint
pub fn default_secondary_endpoint() -> ProviderEndpoint {
    ProviderEndpoint::new(SECONDARY_ENDPOINT.0, SECONDARY_ENDPOINT.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_order() {
        let endpoints = default_primary_endpoints();
        assert_eq!(endpoints.len(), 4);
        assert_eq!(endpoints[0].id, "libretranslate.com");
        assert_eq!(endpoints[3].id, "libretranslate.pussthecat.org");
    }

    #[test]
    fn test_secondary_endpoint() {
        let secondary = default_secondary_endpoint();
        assert_eq!(secondary.id, "mymemory");
        assert!(secondary.url.ends_with("/get"));
    }
}
