//! Supported language registry and name lookup

/// Sentinel source code asking the provider to detect the language
pub const AUTO: &str = "auto";

/// Languages accepted by the primary provider family, code and display name
const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "Hindi"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("ko", "Korean"),
    ("zh-Hans", "Chinese (Simplified)"),
    ("zh-Hant", "Chinese (Traditional)"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("cs", "Czech"),
    ("nl", "Dutch"),
    ("eo", "Esperanto"),
    ("fi", "Finnish"),
    ("de", "German"),
    ("el", "Greek"),
    ("he", "Hebrew"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("ga", "Irish"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sv", "Swedish"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
];

/// Spoken-language aliases recognized by the assistant
const NAME_ALIASES: &[(&str, &str)] = &[
    ("spanish", "es"),
    ("spain", "es"),
    ("español", "es"),
    ("french", "fr"),
    ("france", "fr"),
    ("français", "fr"),
    ("english", "en"),
    ("inglés", "en"),
    ("chinese", "zh-Hans"),
    ("mandarin", "zh-Hans"),
    ("中文", "zh-Hans"),
    ("korean", "ko"),
    ("한국어", "ko"),
    ("hindi", "hi"),
    ("हिंदी", "hi"),
];

/// All supported language codes with display names, in registry order
pub fn supported_languages() -> &'static [(&'static str, &'static str)] {
    SUPPORTED_LANGUAGES
}

/// Check whether a code is in the supported set. `auto` is not a
/// language and is excluded here.
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Map a code to what the wire expects. Supported codes map to
/// themselves; unknown codes pass through unchanged so new provider
/// languages keep working without a registry update.
pub fn wire_code(code: &str) -> &str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(c, _)| *c)
        .unwrap_or(code)
}

/// Display name for a code, uppercased code when unknown
pub fn display_name(code: &str) -> String {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

/// Resolve a spoken language name ("spanish", "español") to its code
pub fn code_for_name(name: &str) -> Option<&'static str> {
    let normalized = name.trim().to_lowercase();
    NAME_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, code)| *code)
}
