//! Persistent local store for theme, history, and favorites

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::state::Theme;
use crate::core::errors::{PolyglotError, Result};
use crate::core::languages;

/// Most recent history entries kept on disk
const HISTORY_CAP: usize = 20;
/// Most recent favorites kept on disk
const FAVORITES_CAP: usize = 10;

/// One saved translation, used for both history and favorites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub id: i64,
    pub input: String,
    pub output: String,
    pub from_lang: String,
    pub to_lang: String,
    pub timestamp: DateTime<Utc>,
}

impl TranslationRecord {
    pub fn new(
        input: impl Into<String>,
        output: impl Into<String>,
        from_lang: impl Into<String>,
        to_lang: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            input: input.into(),
            output: output.into(),
            from_lang: from_lang.into(),
            to_lang: to_lang.into(),
            timestamp: now,
        }
    }
}

/// Everything the store persists, newest entries first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_ui_language")]
    pub ui_language: String,
    #[serde(default)]
    pub history: Vec<TranslationRecord>,
    #[serde(default)]
    pub favorites: Vec<TranslationRecord>,
}

impl Default for StoredState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            ui_language: default_ui_language(),
            history: Vec::new(),
            favorites: Vec::new(),
        }
    }
}

fn default_ui_language() -> String {
    "en".to_string()
}

/// Usage counters surfaced by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub total_translations: usize,
    pub favorite_count: usize,
    pub languages_supported: usize,
}

/// JSON-file backed store
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Store backed by an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$POLYGLOT_DATA_DIR/store.json`, or
    /// `~/.polyglot/store.json` when the variable is unset
    pub fn from_env() -> Result<Self> {
        let dir = match std::env::var("POLYGLOT_DATA_DIR") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .ok_or_else(|| PolyglotError::Config {
                    message: "Could not determine home directory".to_string(),
                })?
                .join(".polyglot"),
        };

        Ok(Self::new(dir.join("store.json")))
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored state, defaults when the file does not exist yet
    pub fn load(&self) -> Result<StoredState> {
        if !self.path.exists() {
            return Ok(StoredState::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| PolyglotError::Store {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Write the stored state, creating parent directories as needed
    pub fn save(&self, state: &StoredState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Prepend a history entry, keeping the newest twenty
    pub fn record_history(&self, record: TranslationRecord) -> Result<()> {
        let mut state = self.load()?;
        state.history.insert(0, record);
        state.history.truncate(HISTORY_CAP);
        self.save(&state)
    }

    /// Prepend a favorite, keeping the newest ten
    pub fn record_favorite(&self, record: TranslationRecord) -> Result<()> {
        let mut state = self.load()?;
        state.favorites.insert(0, record);
        state.favorites.truncate(FAVORITES_CAP);
        self.save(&state)
    }

    /// Drop all history entries
    pub fn clear_history(&self) -> Result<()> {
        let mut state = self.load()?;
        state.history.clear();
        self.save(&state)
    }

    /// Persist the theme choice
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        let mut state = self.load()?;
        state.theme = theme;
        self.save(&state)
    }

    /// Persist the interface language
    pub fn set_ui_language(&self, language: impl Into<String>) -> Result<()> {
        let mut state = self.load()?;
        state.ui_language = language.into();
        self.save(&state)
    }

    /// Usage counters for the stats display
    pub fn stats(&self) -> Result<StoreStats> {
        let state = self.load()?;
        Ok(StoreStats {
            total_translations: state.history.len(),
            favorite_count: state.favorites.len(),
            languages_supported: languages::supported_languages().len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_include;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> LocalStore {
        LocalStore::new(dir.path().join("store.json"))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let state = store.load().unwrap();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.ui_language, "en");
        assert!(state.history.is_empty());
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_history_cap_keeps_newest_first() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        for i in 0..25 {
            store
                .record_history(TranslationRecord::new(
                    format!("text {}", i),
                    format!("texto {}", i),
                    "en",
                    "es",
                ))
                .unwrap();
        }

        let state = store.load().unwrap();
        assert_eq!(state.history.len(), 20);
        assert_eq!(state.history[0].input, "text 24");
        assert_eq!(state.history[19].input, "text 5");
    }

    #[test]
    fn test_favorites_cap() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        for i in 0..12 {
            store
                .record_favorite(TranslationRecord::new(
                    format!("fav {}", i),
                    format!("fav {}", i),
                    "en",
                    "fr",
                ))
                .unwrap();
        }

        let state = store.load().unwrap();
        assert_eq!(state.favorites.len(), 10);
        assert_eq!(state.favorites[0].input, "fav 11");
    }

    #[test]
    fn test_clear_history_leaves_favorites() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store
            .record_history(TranslationRecord::new("a", "b", "en", "es"))
            .unwrap();
        store
            .record_favorite(TranslationRecord::new("c", "d", "en", "es"))
            .unwrap();
        store.clear_history().unwrap();

        let state = store.load().unwrap();
        assert!(state.history.is_empty());
        assert_eq!(state.favorites.len(), 1);
    }

    #[test]
    fn test_persisted_document_shape() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.set_theme(Theme::Dark).unwrap();
        store
            .record_history(TranslationRecord::new("hello", "hola", "en", "es"))
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_json_include!(
            actual: document,
            expected: serde_json::json!({
                "theme": "dark",
                "history": [{
                    "input": "hello",
                    "output": "hola",
                    "from_lang": "en",
                    "to_lang": "es",
                }]
            })
        );
    }

    #[test]
    fn test_corrupt_file_is_a_store_error() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "not json").unwrap();
        assert!(matches!(
            store.load(),
            Err(PolyglotError::Store { .. })
        ));
    }

    #[test]
    fn test_stats_counts() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store
            .record_history(TranslationRecord::new("a", "b", "en", "es"))
            .unwrap();
        store
            .record_history(TranslationRecord::new("c", "d", "en", "es"))
            .unwrap();
        store
            .record_favorite(TranslationRecord::new("e", "f", "en", "es"))
            .unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total_translations, 2);
        assert_eq!(stats.favorite_count, 1);
        assert_eq!(stats.languages_supported, 29);
    }
}
