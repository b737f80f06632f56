//! Application state container

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Session state in one explicit container
///
/// All reads and writes go through the accessors here instead of
/// scattered globals.
#[derive(Debug, Clone)]
pub struct AppState {
    theme: Theme,
    ui_language: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            ui_language: "en".to_string(),
        }
    }
}

impl AppState {
    pub fn new(theme: Theme, ui_language: impl Into<String>) -> Self {
        Self {
            theme,
            ui_language: ui_language.into(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn ui_language(&self) -> &str {
        &self.ui_language
    }

    pub fn set_ui_language(&mut self, language: impl Into<String>) {
        self.ui_language = language.into();
    }
}
