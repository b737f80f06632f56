//! Natural-language command interpretation
//!
//! Everything here is a pure function over the command text, so intent
//! handling stays deterministic and testable without any runtime state.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::languages;

/// Minimum confidence for a classified intent to be acted on
pub const CONFIDENCE_THRESHOLD: f32 = 0.1;

/// What the user asked the assistant to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Translation,
    Clear,
    Theme,
    Help,
    History,
    Favorites,
    Languages,
    Voice,
}

impl Intent {
    /// Label used in replies and logs
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Translation => "translation",
            Intent::Clear => "clear",
            Intent::Theme => "theme",
            Intent::Help => "help",
            Intent::History => "history",
            Intent::Favorites => "favorites",
            Intent::Languages => "languages",
            Intent::Voice => "voice",
        }
    }
}

/// A language the user mentioned in the command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntity {
    pub code: String,
    pub name: String,
}

/// Outcome of classifying one command
#[derive(Debug, Clone)]
pub struct CommandAnalysis {
    pub intent: Option<Intent>,
    pub confidence: f32,
    pub entities: Vec<LanguageEntity>,
}

impl CommandAnalysis {
    /// True when confidence is too low to act on the intent
    pub fn is_uncertain(&self) -> bool {
        self.confidence < CONFIDENCE_THRESHOLD
    }
}

/// Phrases mapped to each intent. Longer matches score higher, so the
/// more specific phrasings win over bare keywords.
const INTENT_PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::Translation,
        &[
            "translate",
            "convert",
            "change language",
            "transform",
            "turn into",
            "how do you say",
            "translate this",
            "convert to",
            "what is this in",
            "how to say",
            "change to",
        ],
    ),
    (
        Intent::Clear,
        &[
            "clear",
            "reset",
            "clean",
            "empty",
            "start over",
            "delete",
            "clear everything",
            "reset fields",
            "start fresh",
            "clean up",
        ],
    ),
    (
        Intent::Theme,
        &[
            "dark mode",
            "light mode",
            "switch theme",
            "change theme",
            "toggle theme",
            "make it dark",
            "turn on dark mode",
            "switch to light",
            "bright mode",
        ],
    ),
    (
        Intent::Help,
        &[
            "help",
            "what can you do",
            "commands",
            "how to use",
            "guide",
            "instructions",
            "show me commands",
            "what are your features",
            "how does this work",
        ],
    ),
    (
        Intent::History,
        &[
            "history",
            "show history",
            "past translations",
            "previous",
            "what did i translate",
            "my translations",
            "translation history",
            "show past work",
        ],
    ),
    (
        Intent::Favorites,
        &[
            "favorites",
            "saved",
            "bookmarks",
            "starred",
            "saved translations",
            "my favorites",
            "show saved",
            "bookmarked translations",
        ],
    ),
    (
        Intent::Languages,
        &[
            "english",
            "spanish",
            "french",
            "chinese",
            "korean",
            "hindi",
            "language",
            "switch to english",
            "change to spanish",
            "set language",
        ],
    ),
    (
        Intent::Voice,
        &[
            "speak",
            "read aloud",
            "say it",
            "voice",
            "audio",
            "pronunciation",
            "how does it sound",
            "pronounce this",
            "read the translation",
        ],
    ),
];

/// Languages the assistant recognizes when mentioned by name
const ENTITY_LANGUAGES: &[(&str, &str)] = &[
    ("english", "en"),
    ("spanish", "es"),
    ("french", "fr"),
    ("chinese", "zh-Hans"),
    ("korean", "ko"),
    ("hindi", "hi"),
];

/// Classify a command into intent, confidence, and language entities
///
/// Confidence is the longest matched phrase relative to the command
/// length, so "translate this to spanish" scores translation higher
/// than a command that merely mentions a language.
pub fn analyze(command: &str) -> CommandAnalysis {
    let lower = command.to_lowercase().trim().to_string();

    let mut analysis = CommandAnalysis {
        intent: None,
        confidence: 0.0,
        entities: Vec::new(),
    };

    if lower.is_empty() {
        return analysis;
    }

    for (name, code) in ENTITY_LANGUAGES {
        if lower.contains(name) {
            analysis.entities.push(LanguageEntity {
                code: (*code).to_string(),
                name: (*name).to_string(),
            });
        }
    }

    for (intent, patterns) in INTENT_PATTERNS {
        let mut max_score = 0.0f32;
        for pattern in *patterns {
            if lower.contains(pattern) {
                let score = pattern.len() as f32 / lower.len() as f32;
                max_score = max_score.max(score);
            }
        }

        if max_score > analysis.confidence {
            analysis.intent = Some(*intent);
            analysis.confidence = max_score;
        }
    }

    analysis
}

/// A translation request extracted from free-form text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTranslation {
    pub text: String,
    /// Target language code, `es` when the spoken name is unknown
    pub target_lang: String,
}

static TRANSLATE_TO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)translate\s+(.+?)\s+(?:to|into|in)\s+(\w+)").expect("valid regex")
});
static HOW_DO_YOU_SAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)how\s+do\s+you\s+say\s+(.+?)\s+in\s+(\w+)").expect("valid regex")
});
static WHAT_IS_IN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)what\s+is\s+(.+?)\s+in\s+(\w+)").expect("valid regex"));

/// Recognize direct translation phrasings
///
/// Handles "translate X to Y", "how do you say X in Y", and
/// "what is X in Y". Returns `None` when the text matches none of them.
pub fn parse_translation_request(text: &str) -> Option<ParsedTranslation> {
    for pattern in [&*TRANSLATE_TO, &*HOW_DO_YOU_SAY, &*WHAT_IS_IN] {
        if let Some(captures) = pattern.captures(text) {
            let to_translate = captures.get(1)?.as_str().trim().to_string();
            let spoken_name = captures.get(2)?.as_str();
            let target_lang = languages::code_for_name(spoken_name).unwrap_or("es");

            return Some(ParsedTranslation {
                text: to_translate,
                target_lang: target_lang.to_string(),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_classification() {
        let analysis = analyze("translate this to spanish");
        assert_eq!(analysis.intent, Some(Intent::Translation));
        assert!(analysis.confidence >= CONFIDENCE_THRESHOLD);
        assert_eq!(analysis.entities.len(), 1);
        assert_eq!(analysis.entities[0].code, "es");
    }

    #[test]
    fn test_theme_intent() {
        let analysis = analyze("switch to dark mode");
        assert_eq!(analysis.intent, Some(Intent::Theme));
    }

    #[test]
    fn test_low_confidence_gating() {
        // The only match is "help" buried in a long sentence, so the
        // length ratio drops below the threshold.
        let analysis = analyze(
            "help me figure out what the weather is going to be like tomorrow afternoon please",
        );
        assert!(analysis.is_uncertain());
    }

    #[test]
    fn test_no_match() {
        let analysis = analyze("qwerty asdf");
        assert_eq!(analysis.intent, None);
        assert_eq!(analysis.confidence, 0.0);
        assert!(analysis.is_uncertain());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let first = analyze("show my history");
        let second = analyze("show my history");
        assert_eq!(first.intent, second.intent);
        assert_eq!(first.confidence, second.confidence);
    }

    #[test]
    fn test_parse_translate_to() {
        let parsed = parse_translation_request("translate good morning to french").unwrap();
        assert_eq!(parsed.text, "good morning");
        assert_eq!(parsed.target_lang, "fr");
    }

    #[test]
    fn test_parse_how_do_you_say() {
        let parsed = parse_translation_request("How do you say thank you in Korean").unwrap();
        assert_eq!(parsed.text, "thank you");
        assert_eq!(parsed.target_lang, "ko");
    }

    #[test]
    fn test_parse_what_is_in() {
        let parsed = parse_translation_request("what is water in hindi").unwrap();
        assert_eq!(parsed.text, "water");
        assert_eq!(parsed.target_lang, "hi");
    }

    #[test]
    fn test_parse_unknown_language_defaults_to_spanish() {
        let parsed = parse_translation_request("translate hello to klingon").unwrap();
        assert_eq!(parsed.target_lang, "es");
    }

    #[test]
    fn test_parse_rejects_plain_chat() {
        assert_eq!(parse_translation_request("hello there"), None);
    }
}
