//! Multi-provider translation resolver with fallback chain

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::core::config::ResolverConfig;
use crate::core::errors::{PolyglotError, Result};
use crate::core::languages;
use crate::core::models::{TranslationRequest, TranslationResult};
use crate::core::providers::ProviderEndpoint;

/// Translation resolver that walks an ordered provider chain
///
/// Candidates are tried strictly in order, one attempt each, and the
/// first success wins. When every provider fails the resolver fails
/// open: the original text comes back unchanged with no provider id.
/// `resolve` therefore never returns an error.
#[derive(Debug, Clone)]
pub struct TranslationResolver {
    client: reqwest::Client,
    config: Arc<ResolverConfig>,
}

impl TranslationResolver {
    /// Create a new resolver
    pub fn new(config: ResolverConfig) -> Result<Self> {
        config.validate()?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = ResolverConfig::from_env()?;
        Self::new(config)
    }

    /// Resolve a translation request against the provider chain
    ///
    /// Callers are expected to pass non-empty text; emptiness is not
    /// checked here.
    pub async fn resolve(&self, request: &TranslationRequest) -> TranslationResult {
        for endpoint in &self.config.primary_endpoints {
            match self.call_primary(endpoint, request).await {
                Ok(text) => {
                    debug!("Primary endpoint {} succeeded", endpoint.id);
                    return TranslationResult::from_provider(text, endpoint.id.clone());
                }
                Err(e) => {
                    warn!("Primary endpoint {} failed: {}", endpoint.id, e);
                    continue;
                }
            }
        }

        let secondary = &self.config.secondary_endpoint;
        match self.call_secondary(secondary, request).await {
            Ok(text) => {
                debug!("Secondary endpoint {} succeeded", secondary.id);
                TranslationResult::from_provider(text, secondary.id.clone())
            }
            Err(e) => {
                warn!("Secondary endpoint {} failed: {}", secondary.id, e);
                warn!("All translation providers failed, returning original text");
                TranslationResult::fallback(request.text.clone())
            }
        }
    }

    /// Resolve several independent requests concurrently
    ///
    /// Output order matches input order.
    pub async fn resolve_batch(&self, requests: Vec<TranslationRequest>) -> Vec<TranslationResult> {
        join_all(requests.iter().map(|request| self.resolve(request))).await
    }

    /// Check provider connectivity with a known-answer translation
    ///
    /// Resolves "Hello" from English to Spanish and reports whether the
    /// text changed. A provider that echoes the input reads as down, so
    /// false negatives are possible by construction.
    pub async fn probe(&self) -> bool {
        let request =
            TranslationRequest::new("Hello".to_string(), "es".to_string()).with_source_lang("en");
        let result = self.resolve(&request).await;
        result.translated_text != "Hello"
    }

    /// One attempt against a primary-family endpoint
    async fn call_primary(
        &self,
        endpoint: &ProviderEndpoint,
        request: &TranslationRequest,
    ) -> Result<String> {
        let source = request
            .source_lang
            .as_deref()
            .map(languages::wire_code)
            .unwrap_or(languages::AUTO);

        let body = serde_json::json!({
            "q": request.text,
            "source": source,
            "target": languages::wire_code(&request.target_lang),
            "format": "text",
        });

        let response = self
            .client
            .post(&endpoint.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PolyglotError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PolyglotError::Protocol {
                status: status.as_u16(),
            });
        }

        let json: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| PolyglotError::Content {
                    message: e.to_string(),
                })?;

        let translated = json["translatedText"]
            .as_str()
            .filter(|text| !text.is_empty())
            .ok_or_else(|| PolyglotError::Content {
                message: "Missing or empty translatedText".to_string(),
            })?;

        Ok(translated.to_string())
    }

    /// One attempt against the secondary endpoint
    ///
    /// Different wire shape: GET with `q` and `langpair`, success only
    /// when the payload carries responseStatus 200 and non-empty text.
    async fn call_secondary(
        &self,
        endpoint: &ProviderEndpoint,
        request: &TranslationRequest,
    ) -> Result<String> {
        let source = request.source_lang.as_deref().unwrap_or(languages::AUTO);
        let langpair = format!("{}|{}", source, request.target_lang);

        let response = self
            .client
            .get(&endpoint.url)
            .query(&[("q", request.text.as_str()), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| PolyglotError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PolyglotError::Protocol {
                status: status.as_u16(),
            });
        }

        let json: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| PolyglotError::Content {
                    message: e.to_string(),
                })?;

        if json["responseStatus"].as_i64() != Some(200) {
            return Err(PolyglotError::Content {
                message: format!("responseStatus {}", json["responseStatus"]),
            });
        }

        let translated = json["responseData"]["translatedText"]
            .as_str()
            .filter(|text| !text.is_empty())
            .ok_or_else(|| PolyglotError::Content {
                message: "Missing or empty translatedText".to_string(),
            })?;

        Ok(translated.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::providers::ProviderEndpoint;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(primary: &[(&str, &MockServer)], secondary: &MockServer) -> ResolverConfig {
        ResolverConfig {
            primary_endpoints: primary
                .iter()
                .map(|(id, server)| {
                    ProviderEndpoint::new(*id, format!("{}/translate", server.uri()))
                })
                .collect(),
            secondary_endpoint: ProviderEndpoint::new("mymemory", format!("{}/get", secondary.uri())),
            timeout_ms: 5_000,
        }
    }

    fn primary_ok(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "translatedText": text }))
    }

    fn secondary_ok(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "responseStatus": 200,
            "responseData": { "translatedText": text }
        }))
    }

    fn request_en_es(text: &str) -> TranslationRequest {
        TranslationRequest::new(text.to_string(), "es".to_string()).with_source_lang("en")
    }

    #[tokio::test]
    async fn first_primary_success_short_circuits() {
        let first = MockServer::start().await;
        let mirror = MockServer::start().await;
        let secondary = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_partial_json(serde_json::json!({
                "q": "Hello",
                "source": "en",
                "target": "es",
                "format": "text",
            })))
            .respond_with(primary_ok("Hola"))
            .expect(1)
            .mount(&first)
            .await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(primary_ok("unexpected"))
            .expect(0)
            .mount(&mirror)
            .await;
        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(secondary_ok("unexpected"))
            .expect(0)
            .mount(&secondary)
            .await;

        let config = test_config(&[("first", &first), ("mirror", &mirror)], &secondary);
        let resolver = TranslationResolver::new(config).unwrap();

        let result = resolver.resolve(&request_en_es("Hello")).await;
        assert_eq!(result.translated_text, "Hola");
        assert_eq!(result.provider_used.as_deref(), Some("first"));
        assert!(!result.is_fallback());
    }

    #[tokio::test]
    async fn failed_primary_escalates_to_mirror() {
        let first = MockServer::start().await;
        let mirror = MockServer::start().await;
        let secondary = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&first)
            .await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(primary_ok("Hola"))
            .expect(1)
            .mount(&mirror)
            .await;
        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(secondary_ok("unexpected"))
            .expect(0)
            .mount(&secondary)
            .await;

        let config = test_config(&[("first", &first), ("mirror", &mirror)], &secondary);
        let resolver = TranslationResolver::new(config).unwrap();

        let result = resolver.resolve(&request_en_es("Hello")).await;
        assert_eq!(result.translated_text, "Hola");
        assert_eq!(result.provider_used.as_deref(), Some("mirror"));
    }

    #[tokio::test]
    async fn exhausted_primaries_escalate_to_secondary() {
        let first = MockServer::start().await;
        let mirror = MockServer::start().await;
        let secondary = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&first)
            .await;
        // 200 with an empty payload counts as a failure too
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mirror)
            .await;
        Mock::given(method("GET"))
            .and(path("/get"))
            .and(query_param("q", "Hello"))
            .and(query_param("langpair", "en|es"))
            .respond_with(secondary_ok("Hola"))
            .expect(1)
            .mount(&secondary)
            .await;

        let config = test_config(&[("first", &first), ("mirror", &mirror)], &secondary);
        let resolver = TranslationResolver::new(config).unwrap();

        let result = resolver.resolve(&request_en_es("Hello")).await;
        assert_eq!(result.translated_text, "Hola");
        assert_eq!(result.provider_used.as_deref(), Some("mymemory"));
    }

    #[tokio::test]
    async fn total_failure_fails_open_with_original_text() {
        let first = MockServer::start().await;
        let mirror = MockServer::start().await;
        let secondary = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&first)
            .await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&mirror)
            .await;
        // Parseable body, but the provider reports failure inline
        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "responseStatus": 403,
                "responseData": { "translatedText": "IGNORED" }
            })))
            .expect(1)
            .mount(&secondary)
            .await;

        let config = test_config(&[("first", &first), ("mirror", &mirror)], &secondary);
        let resolver = TranslationResolver::new(config).unwrap();

        let result = resolver.resolve(&request_en_es("Hello world")).await;
        assert_eq!(result.translated_text, "Hello world");
        assert_eq!(result.provider_used, None);
        assert!(result.is_fallback());
    }

    #[tokio::test]
    async fn auto_detect_source_reaches_the_wire() {
        let first = MockServer::start().await;
        let secondary = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_partial_json(serde_json::json!({ "source": "auto" })))
            .respond_with(primary_ok("Hola"))
            .expect(1)
            .mount(&first)
            .await;

        let config = test_config(&[("first", &first)], &secondary);
        let resolver = TranslationResolver::new(config).unwrap();

        let request = TranslationRequest::new("Hello".to_string(), "es".to_string());
        let result = resolver.resolve(&request).await;
        assert_eq!(result.translated_text, "Hola");
    }

    #[tokio::test]
    async fn resolve_is_idempotent_against_a_stable_provider() {
        let first = MockServer::start().await;
        let secondary = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(primary_ok("Hola"))
            .expect(2)
            .mount(&first)
            .await;

        let config = test_config(&[("first", &first)], &secondary);
        let resolver = TranslationResolver::new(config).unwrap();

        let request = request_en_es("Hello");
        let a = resolver.resolve(&request).await;
        let b = resolver.resolve(&request).await;
        assert_eq!(a.translated_text, b.translated_text);
        assert_eq!(a.provider_used, b.provider_used);
    }

    #[tokio::test]
    async fn batch_preserves_input_order() {
        let first = MockServer::start().await;
        let secondary = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_partial_json(serde_json::json!({ "q": "one" })))
            .respond_with(primary_ok("uno"))
            .expect(1)
            .mount(&first)
            .await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_partial_json(serde_json::json!({ "q": "two" })))
            .respond_with(primary_ok("dos"))
            .expect(1)
            .mount(&first)
            .await;

        let config = test_config(&[("first", &first)], &secondary);
        let resolver = TranslationResolver::new(config).unwrap();

        let results = resolver
            .resolve_batch(vec![request_en_es("one"), request_en_es("two")])
            .await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].translated_text, "uno");
        assert_eq!(results[1].translated_text, "dos");
    }

    #[tokio::test]
    async fn probe_reports_true_when_text_changes() {
        let first = MockServer::start().await;
        let secondary = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(primary_ok("Hola"))
            .expect(1)
            .mount(&first)
            .await;

        let config = test_config(&[("first", &first)], &secondary);
        let resolver = TranslationResolver::new(config).unwrap();
        assert!(resolver.probe().await);
    }

    #[tokio::test]
    async fn probe_reports_false_when_providers_are_down() {
        let first = MockServer::start().await;
        let secondary = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&first)
            .await;
        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&secondary)
            .await;

        let config = test_config(&[("first", &first)], &secondary);
        let resolver = TranslationResolver::new(config).unwrap();
        assert!(!resolver.probe().await);
    }
}
