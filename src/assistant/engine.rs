//! Assistant orchestration
//!
//! Commands flow through three tiers: direct translation phrasings go
//! straight to the resolver, everything else goes to the generative
//! backend when one is configured, and scripted replies cover the rest.

use tracing::warn;

use crate::assistant::generative::{
    classify_question, command_prompt, ConversationTurn, GeminiBackend, GenerativeBackend,
    PromptContext,
};
use crate::assistant::interpreter::{analyze, parse_translation_request};
use crate::assistant::responses::{scan_for_action, scripted_reply, AssistantAction};
use crate::core::errors::Result;
use crate::core::languages;
use crate::core::models::TranslationRequest;
use crate::core::resolver::TranslationResolver;

/// Confidence attached to generative replies
const GENERATIVE_CONFIDENCE: f32 = 0.95;

/// Conversation turns kept as backend context
const CONTEXT_TURNS: usize = 5;

/// Reply produced for one assistant command
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub text: String,
    pub intent: String,
    pub confidence: f32,
    pub action: Option<AssistantAction>,
    pub ai_powered: bool,
}

/// Conversational assistant over the resolver and a generative backend
pub struct Assistant {
    resolver: TranslationResolver,
    backend: Box<dyn GenerativeBackend>,
}

impl Assistant {
    /// Create an assistant with explicit dependencies
    pub fn new(resolver: TranslationResolver, backend: Box<dyn GenerativeBackend>) -> Self {
        Self { resolver, backend }
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let resolver = TranslationResolver::from_env()?;
        let backend = Box::new(GeminiBackend::from_env()?);
        Ok(Self { resolver, backend })
    }

    /// Handle one command and produce a reply
    pub async fn handle(&self, command: &str, conversation: &[ConversationTurn]) -> AssistantReply {
        if let Some(parsed) = parse_translation_request(command) {
            let request =
                TranslationRequest::new(parsed.text.clone(), parsed.target_lang.clone());
            let result = self.resolver.resolve(&request).await;

            let text = if result.is_fallback() {
                "Sorry, I couldn't translate that text right now. Please try again later."
                    .to_string()
            } else {
                format!(
                    "\"{}\" in {} is: \"{}\"",
                    parsed.text,
                    languages::display_name(&parsed.target_lang),
                    result.translated_text
                )
            };

            return AssistantReply {
                text,
                intent: "direct_translation".to_string(),
                confidence: 1.0,
                action: None,
                ai_powered: false,
            };
        }

        let analysis = analyze(command);

        if self.backend.is_available() {
            let kind = classify_question(command);
            let prompt = command_prompt(command, kind);
            let skip = conversation.len().saturating_sub(CONTEXT_TURNS);
            let context = PromptContext {
                intent: analysis.intent.map(|intent| intent.label().to_string()),
                recent_turns: conversation[skip..].to_vec(),
                translation_context: None,
            };

            match self.backend.generate(&prompt, &context).await {
                Ok(text) => {
                    return AssistantReply {
                        text,
                        intent: "gemini_ai".to_string(),
                        confidence: GENERATIVE_CONFIDENCE,
                        // The model only talks; state changes still
                        // come from the command itself
                        action: scan_for_action(command),
                        ai_powered: true,
                    };
                }
                Err(e) => {
                    warn!("Generative backend failed, using scripted reply: {}", e);
                }
            }
        }

        let reply = scripted_reply(&analysis, command);
        AssistantReply {
            text: reply.text,
            intent: analysis
                .intent
                .map(|intent| intent.label().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            confidence: analysis.confidence,
            action: reply.action,
            ai_powered: false,
        }
    }
}

/// Suggested follow-up commands, biased by the latest exchange
pub fn suggestions(conversation: &[ConversationTurn]) -> Vec<String> {
    let mut commands = vec![
        "How do I use voice features?".to_string(),
        "Tell me about dark mode".to_string(),
        "What languages do you support?".to_string(),
        "How can I save favorites?".to_string(),
    ];

    if let Some(last) = conversation.last() {
        if last.user.contains("translate") {
            commands.insert(0, "How to improve pronunciation?".to_string());
        } else if last.user.contains("language") {
            commands.insert(0, "Show translation tips".to_string());
        }
    }

    commands.truncate(4);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Theme;
    use crate::core::config::ResolverConfig;
    use crate::core::errors::PolyglotError;
    use crate::core::providers::ProviderEndpoint;
    use async_trait::async_trait;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct StubBackend {
        available: bool,
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl GenerativeBackend for StubBackend {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn generate(&self, _prompt: &str, _context: &PromptContext) -> Result<String> {
            match self.reply {
                Some(text) => Ok(text.to_string()),
                None => Err(PolyglotError::AssistantUnavailable {
                    message: "stub".to_string(),
                }),
            }
        }
    }

    // Endpoints on the discard port: any attempt to reach them fails
    // fast, which these tests rely on never happening anyway
    fn offline_resolver() -> TranslationResolver {
        let config = ResolverConfig {
            primary_endpoints: vec![ProviderEndpoint::new("test", "http://127.0.0.1:9/translate")],
            secondary_endpoint: ProviderEndpoint::new("test2", "http://127.0.0.1:9/get"),
            timeout_ms: 1_000,
        };
        TranslationResolver::new(config).unwrap()
    }

    #[tokio::test]
    async fn generative_reply_carries_action_from_command() {
        let assistant = Assistant::new(
            offline_resolver(),
            Box::new(StubBackend {
                available: true,
                reply: Some("Sure, switching it up!"),
            }),
        );

        let reply = assistant.handle("please switch to dark mode", &[]).await;
        assert_eq!(reply.text, "Sure, switching it up!");
        assert_eq!(reply.intent, "gemini_ai");
        assert!(reply.ai_powered);
        assert_eq!(reply.confidence, 0.95);
        assert_eq!(reply.action, Some(AssistantAction::SetTheme(Theme::Dark)));
    }

    #[tokio::test]
    async fn unavailable_backend_means_scripted_reply() {
        let assistant = Assistant::new(
            offline_resolver(),
            Box::new(StubBackend {
                available: false,
                reply: None,
            }),
        );

        let reply = assistant.handle("clear everything", &[]).await;
        assert_eq!(reply.intent, "clear");
        assert_eq!(reply.action, Some(AssistantAction::Clear));
        assert!(!reply.ai_powered);
    }

    #[tokio::test]
    async fn backend_error_falls_back_to_scripted_reply() {
        let assistant = Assistant::new(
            offline_resolver(),
            Box::new(StubBackend {
                available: true,
                reply: None,
            }),
        );

        let reply = assistant.handle("show my history", &[]).await;
        assert_eq!(reply.intent, "history");
        assert_eq!(reply.action, Some(AssistantAction::ShowHistory));
        assert!(!reply.ai_powered);
    }

    #[tokio::test]
    async fn direct_translation_is_formatted_from_resolver_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "translatedText": "Hola" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = ResolverConfig {
            primary_endpoints: vec![ProviderEndpoint::new(
                "mock",
                format!("{}/translate", server.uri()),
            )],
            secondary_endpoint: ProviderEndpoint::new("test2", "http://127.0.0.1:9/get"),
            timeout_ms: 5_000,
        };
        let assistant = Assistant::new(
            TranslationResolver::new(config).unwrap(),
            Box::new(StubBackend {
                available: true,
                reply: Some("should not be used"),
            }),
        );

        let reply = assistant.handle("translate hello to spanish", &[]).await;
        assert_eq!(reply.text, "\"hello\" in Spanish is: \"Hola\"");
        assert_eq!(reply.intent, "direct_translation");
        assert_eq!(reply.confidence, 1.0);
        assert!(!reply.ai_powered);
    }

    #[tokio::test]
    async fn direct_translation_fallback_apologizes() {
        let assistant = Assistant::new(
            offline_resolver(),
            Box::new(StubBackend {
                available: false,
                reply: None,
            }),
        );

        let reply = assistant.handle("translate hello to spanish", &[]).await;
        assert!(reply.text.starts_with("Sorry"));
        assert_eq!(reply.intent, "direct_translation");
    }

    #[test]
    fn suggestions_follow_the_conversation() {
        let base = suggestions(&[]);
        assert_eq!(base.len(), 4);
        assert_eq!(base[0], "How do I use voice features?");

        let after_translate = suggestions(&[ConversationTurn {
            user: "translate hi".to_string(),
            assistant: "done".to_string(),
        }]);
        assert_eq!(after_translate[0], "How to improve pronunciation?");
        assert_eq!(after_translate.len(), 4);
    }
}
