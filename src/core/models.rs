//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Translation request
///
/// `source_lang` of `None` means the provider should auto-detect the
/// source language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: Option<String>,
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(text: String, target_lang: String) -> Self {
        Self {
            text,
            source_lang: None,
            target_lang,
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }
}

/// Translation result
///
/// `provider_used` names the endpoint that served the translation.
/// `None` means every provider failed and `translated_text` carries the
/// original input unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub provider_used: Option<String>,
}

impl TranslationResult {
    /// Result served by a named provider
    pub fn from_provider(translated_text: String, provider: impl Into<String>) -> Self {
        Self {
            translated_text,
            provider_used: Some(provider.into()),
        }
    }

    /// Fail-open result carrying the original text
    pub fn fallback(original_text: impl Into<String>) -> Self {
        Self {
            translated_text: original_text.into(),
            provider_used: None,
        }
    }

    /// True when no provider produced a translation
    pub fn is_fallback(&self) -> bool {
        self.provider_used.is_none()
    }
}
