//! Polyglot - resilient multi-provider translation library
//!
//! This library provides asynchronous translation over a chain of public
//! providers with fail-open fallback, a pattern-driven conversational
//! assistant, and local persistence for history and favorites.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod app;
pub mod assistant;
pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    config::ResolverConfig,
    errors::{PolyglotError, Result},
    models::{TranslationRequest, TranslationResult},
    resolver::TranslationResolver,
};

pub use crate::assistant::{
    engine::{Assistant, AssistantReply},
    generative::{ConversationTurn, GeminiBackend, GenerativeBackend},
};

pub use crate::app::{state::Theme, store::LocalStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
