//! Static interface message catalogs

/// Message catalogs per interface language
const CATALOGS: &[(&str, &[(&str, &str)])] = &[
    (
        "en",
        &[
            ("welcome_message", "Welcome to Polyglot!"),
            (
                "app_introduction",
                "This is a simple application to demonstrate multilingual capabilities.",
            ),
            ("change_language_label", "Select Language:"),
        ],
    ),
    (
        "es",
        &[
            ("welcome_message", "¡Bienvenido a Polyglot!"),
            (
                "app_introduction",
                "Esta es una aplicación sencilla para demostrar las capacidades multilingües.",
            ),
            ("change_language_label", "Seleccione el Idioma:"),
        ],
    ),
    (
        "fr",
        &[
            ("welcome_message", "Bienvenue chez Polyglot !"),
            (
                "app_introduction",
                "Ceci est une application simple pour démontrer les capacités multilingues.",
            ),
            ("change_language_label", "Choisir la Langue:"),
        ],
    ),
    (
        "de",
        &[
            ("welcome_message", "Willkommen bei Polyglot!"),
            (
                "app_introduction",
                "Dies ist eine einfache Anwendung zur Demonstration mehrsprachiger Funktionen.",
            ),
            ("change_language_label", "Sprache auswählen:"),
        ],
    ),
    (
        "it",
        &[
            ("welcome_message", "Benvenuto in Polyglot!"),
            (
                "app_introduction",
                "Questa è un'applicazione semplice per dimostrare le capacità multilingue.",
            ),
            ("change_language_label", "Seleziona Lingua:"),
        ],
    ),
    (
        "pt",
        &[
            ("welcome_message", "Bem-vindo ao Polyglot!"),
            (
                "app_introduction",
                "Esta é uma aplicação simples para demonstrar capacidades multilíngues.",
            ),
            ("change_language_label", "Selecionar Idioma:"),
        ],
    ),
    (
        "ru",
        &[
            ("welcome_message", "Добро пожаловать в Polyglot!"),
            (
                "app_introduction",
                "Это простое приложение для демонстрации многоязычных возможностей.",
            ),
            ("change_language_label", "Выберите язык:"),
        ],
    ),
    (
        "ja",
        &[
            ("welcome_message", "Polyglotへようこそ！"),
            (
                "app_introduction",
                "これは多言語機能を実証するシンプルなアプリケーションです。",
            ),
            ("change_language_label", "言語を選択："),
        ],
    ),
    (
        "zh",
        &[
            ("welcome_message", "欢迎来到Polyglot！"),
            (
                "app_introduction",
                "这是一个演示多语言功能的简单应用程序。",
            ),
            ("change_language_label", "选择语言："),
        ],
    ),
    (
        "ar",
        &[
            ("welcome_message", "مرحباً بك في Polyglot!"),
            (
                "app_introduction",
                "هذا تطبيق بسيط لإظهار القدرات متعددة اللغات.",
            ),
            ("change_language_label", "اختر اللغة:"),
        ],
    ),
    (
        "hi",
        &[
            ("welcome_message", "Polyglot में आपका स्वागत है!"),
            (
                "app_introduction",
                "यह बहुभाषी क्षमताओं को प्रदर्शित करने के लिए एक सरल एप्लिकेशन है।",
            ),
            ("change_language_label", "भाषा चुनें:"),
        ],
    ),
    (
        "nl",
        &[
            ("welcome_message", "Welkom bij Polyglot!"),
            (
                "app_introduction",
                "Dit is een eenvoudige applicatie om meertalige mogelijkheden te demonstreren.",
            ),
            ("change_language_label", "Selecteer Taal:"),
        ],
    ),
    (
        "sv",
        &[
            ("welcome_message", "Välkommen till Polyglot!"),
            (
                "app_introduction",
                "Detta är en enkel applikation för att demonstrera flerspråkiga funktioner.",
            ),
            ("change_language_label", "Välj Språk:"),
        ],
    ),
    (
        "ko",
        &[
            ("welcome_message", "Polyglot에 오신 것을 환영합니다!"),
            (
                "app_introduction",
                "이것은 다국어 기능을 시연하는 간단한 애플리케이션입니다.",
            ),
            ("change_language_label", "언어 선택:"),
        ],
    ),
];

/// Interface languages with a message catalog
pub fn ui_languages() -> Vec<&'static str> {
    CATALOGS.iter().map(|(code, _)| *code).collect()
}

/// Look up an interface message
///
/// Unknown languages fall back to English; an unknown key comes back
/// as itself so missing catalog entries stay visible instead of
/// breaking the caller.
pub fn t<'a>(language: &str, key: &'a str) -> &'a str {
    let catalog = CATALOGS
        .iter()
        .find(|(code, _)| *code == language)
        .or_else(|| CATALOGS.iter().find(|(code, _)| *code == "en"))
        .map(|(_, messages)| *messages);

    catalog
        .and_then(|messages| messages.iter().find(|(k, _)| *k == key))
        .map(|(_, message)| *message)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_language_and_key() {
        assert_eq!(t("es", "welcome_message"), "¡Bienvenido a Polyglot!");
        assert_eq!(t("ko", "change_language_label"), "언어 선택:");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(t("xx", "welcome_message"), "Welcome to Polyglot!");
    }

    #[test]
    fn test_unknown_key_echoes_key() {
        assert_eq!(t("en", "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_fourteen_ui_languages() {
        assert_eq!(ui_languages().len(), 14);
        assert!(ui_languages().contains(&"ar"));
    }

    #[test]
    fn test_every_catalog_is_complete() {
        for language in ui_languages() {
            for key in ["welcome_message", "app_introduction", "change_language_label"] {
                assert_ne!(t(language, key), key, "{} missing {}", language, key);
            }
        }
    }
}
