//! Scripted assistant replies and state actions

use crate::app::state::Theme;
use crate::assistant::interpreter::{CommandAnalysis, Intent};

/// A state change requested by the assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantAction {
    Clear,
    SetTheme(Theme),
    ShowHistory,
    ShowFavorites,
    Speak,
    SetTargetLanguage(String),
}

/// A canned reply plus the action it triggers
#[derive(Debug, Clone)]
pub struct ScriptedReply {
    pub text: String,
    pub action: Option<AssistantAction>,
}

const TRANSLATION_REPLIES: &[&str] = &[
    "I'll help you translate that text. Please enter your text in the input field above.",
    "Ready to translate! Just type or speak your text and I'll handle the rest.",
    "Let's translate something! Enter your text and choose your target language.",
];

const CLEAR_REPLIES: &[&str] = &[
    "Fields cleared! Ready for new translations.",
    "All cleared! What would you like to translate next?",
    "Fresh start! The translation fields are now empty.",
];

const THEME_DARK_REPLIES: &[&str] = &[
    "Switching to dark mode for better nighttime use!",
    "Dark mode activated! Easy on the eyes.",
    "Going dark! Hope you like the new look.",
];

const THEME_LIGHT_REPLIES: &[&str] = &[
    "Switching to light mode for brighter viewing!",
    "Light mode activated! Clear and bright.",
    "Going bright! Perfect for daytime use.",
];

const HELP_REPLIES: &[&str] = &[
    "I'm your smart translation assistant! I can translate text, switch themes, clear fields, show history, manage favorites, and much more. Try natural commands like 'translate this to Spanish' or 'show my history'.",
    "I understand natural language! You can say things like 'change to dark mode', 'clear everything', 'translate to French', or 'show my favorites'. Just speak naturally!",
    "I'm here to make translation easier! I can help with translations, manage your favorites, show history, switch themes, and understand context. Try speaking to me naturally!",
];

const HISTORY_REPLIES: &[&str] = &[
    "Here's your translation history! I'll open it for you.",
    "Loading your previous translations right now!",
    "Your translation history is coming up!",
];

const FAVORITES_REPLIES: &[&str] = &[
    "Here are your favorite translations!",
    "Loading your saved translations now!",
    "Your bookmarked translations are ready to view!",
];

const VOICE_REPLIES: &[&str] = &[
    "I'll read the translation aloud for you!",
    "Let me speak that translation for you!",
    "Playing the audio pronunciation now!",
];

const LANGUAGES_REPLY: &str = "I can translate between English, Spanish, French, Chinese, Korean, and Hindi. Which languages would you like to work with?";

/// Deterministic pick from a reply table, keyed on command length so
/// the same command always gets the same wording
fn pick(table: &[&str], command: &str) -> String {
    table[command.len() % table.len()].to_string()
}

/// Build the scripted reply for an analyzed command
pub fn scripted_reply(analysis: &CommandAnalysis, command: &str) -> ScriptedReply {
    if analysis.is_uncertain() {
        return ScriptedReply {
            text: format!(
                "I heard \"{}\" but I'm not quite sure what you'd like me to do. \
                 Try saying something like \"translate this to Spanish\", \"switch to dark mode\", \
                 or \"show my history\". You can also say \"help\" for more options!",
                command
            ),
            action: None,
        };
    }

    let lower = command.to_lowercase();

    match analysis.intent {
        Some(Intent::Translation) => match analysis.entities.first() {
            Some(entity) => ScriptedReply {
                text: format!(
                    "I'll help you translate to {}! Please enter your text above and I'll translate it for you.",
                    entity.name
                ),
                action: Some(AssistantAction::SetTargetLanguage(entity.code.clone())),
            },
            None => ScriptedReply {
                text: pick(TRANSLATION_REPLIES, command),
                action: None,
            },
        },
        Some(Intent::Clear) => ScriptedReply {
            text: pick(CLEAR_REPLIES, command),
            action: Some(AssistantAction::Clear),
        },
        Some(Intent::Theme) => {
            if lower.contains("dark") {
                ScriptedReply {
                    text: pick(THEME_DARK_REPLIES, command),
                    action: Some(AssistantAction::SetTheme(Theme::Dark)),
                }
            } else if lower.contains("light") {
                ScriptedReply {
                    text: pick(THEME_LIGHT_REPLIES, command),
                    action: Some(AssistantAction::SetTheme(Theme::Light)),
                }
            } else {
                ScriptedReply {
                    text: "Would you like dark mode or light mode?".to_string(),
                    action: None,
                }
            }
        }
        Some(Intent::Help) => ScriptedReply {
            text: pick(HELP_REPLIES, command),
            action: None,
        },
        Some(Intent::History) => ScriptedReply {
            text: pick(HISTORY_REPLIES, command),
            action: Some(AssistantAction::ShowHistory),
        },
        Some(Intent::Favorites) => ScriptedReply {
            text: pick(FAVORITES_REPLIES, command),
            action: Some(AssistantAction::ShowFavorites),
        },
        Some(Intent::Voice) => ScriptedReply {
            text: pick(VOICE_REPLIES, command),
            action: Some(AssistantAction::Speak),
        },
        Some(Intent::Languages) => ScriptedReply {
            text: LANGUAGES_REPLY.to_string(),
            action: None,
        },
        None => ScriptedReply {
            text: format!(
                "I heard \"{}\" but I need a bit more information. Try being more specific!",
                command
            ),
            action: None,
        },
    }
}

/// Languages that can be set as target straight from a command
const ACTION_LANGUAGES: &[(&str, &str)] = &[
    ("spanish", "es"),
    ("french", "fr"),
    ("chinese", "zh-Hans"),
    ("korean", "ko"),
    ("hindi", "hi"),
    ("english", "en"),
];

/// Extract a state action from the raw command text
///
/// Used on the generative path, where the reply text comes from the
/// model but state changes still have to happen locally.
pub fn scan_for_action(command: &str) -> Option<AssistantAction> {
    let lower = command.to_lowercase();

    if lower.contains("clear") {
        return Some(AssistantAction::Clear);
    }
    if lower.contains("dark mode") {
        return Some(AssistantAction::SetTheme(Theme::Dark));
    }
    if lower.contains("light mode") {
        return Some(AssistantAction::SetTheme(Theme::Light));
    }
    if lower.contains("history") {
        return Some(AssistantAction::ShowHistory);
    }
    if lower.contains("favorites") {
        return Some(AssistantAction::ShowFavorites);
    }
    if lower.contains("speak") {
        return Some(AssistantAction::Speak);
    }

    for (name, code) in ACTION_LANGUAGES {
        if lower.contains(name) {
            return Some(AssistantAction::SetTargetLanguage((*code).to_string()));
        }
    }

    None
}
