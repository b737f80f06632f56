//! Generative AI backend behind a capability trait
//!
//! The assistant only ever talks to `GenerativeBackend`, so tests can
//! swap in a stub and the rest of the crate never touches the remote
//! model directly.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::{PolyglotError, Result};

/// Placeholder value shipped in .env templates, treated as no key
const PLACEHOLDER_KEY: &str = "your_gemini_api_key_here";

const DEFAULT_MODEL: &str = "gemini-pro";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GENERATE_TIMEOUT_MS: u64 = 15_000;

/// One user/assistant exchange kept as conversation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub user: String,
    pub assistant: String,
}

/// Context handed to the backend along with the prompt
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    /// Intent label, when one was classified
    pub intent: Option<String>,
    /// Recent exchanges, newest last
    pub recent_turns: Vec<ConversationTurn>,
    /// Summary of the translation being discussed, if any
    pub translation_context: Option<String>,
}

/// Rough category of a user question, used to steer the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    AppFeature,
    TranslationHelp,
    LanguageLearning,
    GeneralRelevant,
    OffTopic,
    General,
}

const APP_FEATURE_KEYWORDS: &[&str] = &[
    "dark mode",
    "light mode",
    "theme",
    "voice",
    "history",
    "favorite",
    "clear",
    "settings",
    "how to use",
    "feature",
];

const TRANSLATION_HELP_KEYWORDS: &[&str] = &[
    "translate",
    "translation",
    "language",
    "spanish",
    "french",
    "chinese",
    "korean",
    "hindi",
    "english",
    "how do you say",
];

const LANGUAGE_LEARNING_KEYWORDS: &[&str] = &[
    "learn",
    "practice",
    "pronunciation",
    "grammar",
    "vocabulary",
    "fluent",
];

const GENERAL_RELEVANT_KEYWORDS: &[&str] =
    &["communication", "technology", "api", "speech", "ai", "gemini"];

const OFF_TOPIC_KEYWORDS: &[&str] = &[
    "weather", "food", "sports", "movie", "music", "game", "politics", "shopping", "travel",
    "recipe", "news",
];

/// Categorize a question by keyword, first matching bucket wins
pub fn classify_question(command: &str) -> QuestionKind {
    let lower = command.to_lowercase();
    let matches_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if matches_any(APP_FEATURE_KEYWORDS) {
        QuestionKind::AppFeature
    } else if matches_any(TRANSLATION_HELP_KEYWORDS) {
        QuestionKind::TranslationHelp
    } else if matches_any(LANGUAGE_LEARNING_KEYWORDS) {
        QuestionKind::LanguageLearning
    } else if matches_any(GENERAL_RELEVANT_KEYWORDS) {
        QuestionKind::GeneralRelevant
    } else if matches_any(OFF_TOPIC_KEYWORDS) {
        QuestionKind::OffTopic
    } else {
        QuestionKind::General
    }
}

/// Instruction wrapped around a command before it reaches the model
pub fn command_prompt(command: &str, kind: QuestionKind) -> String {
    match kind {
        QuestionKind::AppFeature => format!(
            "User asks about an app feature: \"{}\". Explain how to use this feature of the app and share one practical tip.",
            command
        ),
        QuestionKind::TranslationHelp => format!(
            "User needs translation help: \"{}\". Guide them on using the translation features effectively, mentioning the supported languages and voice features.",
            command
        ),
        QuestionKind::LanguageLearning => format!(
            "User asks about language learning: \"{}\". Connect the answer to practicing with the app's translation, pronunciation, and favorites features.",
            command
        ),
        QuestionKind::GeneralRelevant => format!(
            "User asks: \"{}\". This relates to languages or technology. Connect the answer to the app's translation features where possible.",
            command
        ),
        QuestionKind::OffTopic => format!(
            "User asks: \"{}\". This is unrelated to translation. Politely redirect to translation features and suggest an alternative they might try.",
            command
        ),
        QuestionKind::General => format!(
            "User says: \"{}\". Interpret their intent and provide helpful guidance about using the translation app.",
            command
        ),
    }
}

/// Assemble the full prompt: assistant role, app context, recent
/// conversation, then the request
pub fn build_contextual_prompt(user_input: &str, context: &PromptContext) -> String {
    let mut prompt = String::from(
        "You are the built-in assistant of Polyglot, a translation application.\n\
         \n\
         Your role: help users use the app, assist with translations, and share language learning tips.\n\
         App features: multi-provider text translation, voice input and output, dark and light themes, translation history, favorites.\n\
         Core languages: English, Spanish, French, Chinese (Simplified), Korean, Hindi.\n\
         Guidelines: stay relevant to the translation app, be practical and encouraging, keep responses under 100 words, politely redirect unrelated questions back to app features.\n\
         \n\
         Current context:\n",
    );

    prompt.push_str(&format!(
        "- User intent: {}\n",
        context.intent.as_deref().unwrap_or("general assistance")
    ));

    if let Some(translation) = &context.translation_context {
        prompt.push_str(&format!("- Recent translation: {}\n", translation));
    }

    if !context.recent_turns.is_empty() {
        prompt.push_str("- Recent conversation:\n");
        let skip = context.recent_turns.len().saturating_sub(3);
        for turn in &context.recent_turns[skip..] {
            prompt.push_str(&format!(
                "User: {}\nAssistant: {}\n",
                turn.user, turn.assistant
            ));
        }
    }

    prompt.push_str(&format!(
        "\nUser request: {}\n\nAssistant response:",
        user_input
    ));
    prompt
}

/// A model that can generate conversational replies
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Whether the backend is configured and worth calling
    fn is_available(&self) -> bool;

    /// Generate a reply for the prompt, given conversation context
    async fn generate(&self, prompt: &str, context: &PromptContext) -> Result<String>;
}

/// Gemini-backed implementation of [`GenerativeBackend`]
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiBackend {
    /// Create a backend with an explicit key and model
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(GENERATE_TIMEOUT_MS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create from environment
    ///
    /// A missing, empty, or template-placeholder `GEMINI_API_KEY` gives
    /// an unavailable backend rather than an error, so callers degrade
    /// to scripted replies.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_KEY);
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self::new(api_key, model)
    }

    /// Point the backend at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str, context: &PromptContext) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| PolyglotError::AssistantUnavailable {
                message: "No API key configured".to_string(),
            })?;

        let full_prompt = build_contextual_prompt(prompt, context);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": full_prompt }]
            }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
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

        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| PolyglotError::Content {
                message: "No text in model response".to_string(),
            })?;

        Ok(text.trim().to_string())
    }
}
