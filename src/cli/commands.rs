//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;

use crate::app::localization;
use crate::app::state::AppState;
use crate::app::store::{LocalStore, TranslationRecord};
use crate::assistant::engine::{suggestions, Assistant};
use crate::assistant::interpreter::CONFIDENCE_THRESHOLD;
use crate::assistant::responses::AssistantAction;
use crate::core::languages;
use crate::core::models::TranslationRequest;
use crate::core::resolver::TranslationResolver;

/// How many translations run concurrently during batch work
const BATCH_CHUNK_SIZE: usize = 8;

/// Commands for the Polyglot CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate a single text
    Translate {
        /// Text to translate
        text: String,

        /// Source language (auto-detect if not specified)
        #[arg(long)]
        source_lang: Option<String>,

        /// Target language (default: es)
        #[arg(short, long, default_value = "es")]
        target_lang: String,

        /// Also save the result to favorites
        #[arg(long)]
        save: bool,
    },

    /// Translate a file with one text per line
    Batch {
        /// Input file (required)
        #[arg(short, long)]
        file: PathBuf,

        /// Output file (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Source language (auto-detect if not specified)
        #[arg(long)]
        source_lang: Option<String>,

        /// Target language (default: es)
        #[arg(short, long, default_value = "es")]
        target_lang: String,
    },

    /// Send one command or question to the assistant
    Assistant {
        /// Command or question, in natural language
        command: String,

        /// Interface language for app messages
        #[arg(long)]
        ui_language: Option<String>,
    },

    /// Show translation history
    History {
        /// Clear the history instead of showing it
        #[arg(long)]
        clear: bool,
    },

    /// Show saved favorites
    Favorites,

    /// Check translation provider connectivity
    Probe,

    /// List supported languages
    Languages,

    /// Show usage statistics
    Stats,
}

/// Handle single-text translation
pub async fn handle_translate(
    text: String,
    source_lang: Option<String>,
    target_lang: String,
    save: bool,
) -> anyhow::Result<()> {
    use tracing::info;

    if text.trim().is_empty() {
        anyhow::bail!("Nothing to translate");
    }

    info!("Translating to {}", target_lang);

    let resolver = TranslationResolver::from_env()?;

    let mut request = TranslationRequest::new(text.clone(), target_lang.clone());
    if let Some(source) = &source_lang {
        request = request.with_source_lang(source.clone());
    }

    let result = resolver.resolve(&request).await;

    match &result.provider_used {
        Some(provider) => {
            println!("✅ {}", result.translated_text);
            println!("   Provider: {}", provider);

            let store = LocalStore::from_env()?;
            let from_lang = source_lang.unwrap_or_else(|| languages::AUTO.to_string());
            let record = TranslationRecord::new(
                text,
                result.translated_text.clone(),
                from_lang,
                target_lang,
            );
            store.record_history(record.clone())?;

            if save {
                store.record_favorite(record)?;
                println!("   Saved to favorites");
            }
        }
        None => {
            println!("⚠️  All providers failed, showing original text:");
            println!("   {}", result.translated_text);
        }
    }

    Ok(())
}

/// Handle batch translation of a line-per-text file
pub async fn handle_batch(
    file: PathBuf,
    output: Option<PathBuf>,
    source_lang: Option<String>,
    target_lang: String,
) -> anyhow::Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;
    use tracing::info;

    let start_time = Instant::now();

    let content = std::fs::read_to_string(&file)?;
    let texts: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect();

    if texts.is_empty() {
        anyhow::bail!("No texts found in {}", file.display());
    }

    info!("Translating {} texts to {}", texts.len(), target_lang);
    info!("Input: {}", file.display());

    let resolver = TranslationResolver::from_env()?;

    let requests: Vec<TranslationRequest> = texts
        .iter()
        .map(|text| {
            let mut request = TranslationRequest::new(text.clone(), target_lang.clone());
            if let Some(source) = &source_lang {
                request = request.with_source_lang(source.clone());
            }
            request
        })
        .collect();

    let pb = ProgressBar::new(requests.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        .unwrap()
        .progress_chars("=>-"));

    let mut results = Vec::with_capacity(requests.len());
    for chunk in requests.chunks(BATCH_CHUNK_SIZE) {
        pb.set_message(format!("Translating to {}", target_lang));
        let chunk_results = resolver.resolve_batch(chunk.to_vec()).await;
        pb.inc(chunk_results.len() as u64);
        results.extend(chunk_results);
    }

    pb.finish_with_message("Completed");

    let fell_back = results.iter().filter(|result| result.is_fallback()).count();
    let translated = results.len() - fell_back;

    let lines: Vec<&str> = results
        .iter()
        .map(|result| result.translated_text.as_str())
        .collect();

    match &output {
        Some(path) => {
            std::fs::write(path, lines.join("\n") + "\n")?;
            println!("\n✅ Batch translation completed!");
            println!("   Output: {}", path.display());
        }
        None => {
            println!();
            for line in &lines {
                println!("{}", line);
            }
            println!("\n✅ Batch translation completed!");
        }
    }

    println!("   Translated: {}", translated);
    println!("   Fell back: {}", fell_back);
    println!("   Time: {:?}", start_time.elapsed());

    Ok(())
}

/// Handle one assistant exchange
pub async fn handle_assistant(command: String, ui_language: Option<String>) -> anyhow::Result<()> {
    let store = LocalStore::from_env()?;
    if let Some(language) = &ui_language {
        store.set_ui_language(language.clone())?;
    }

    let stored = store.load()?;
    let mut state = AppState::new(stored.theme, stored.ui_language.clone());

    println!("🤖 {}", localization::t(state.ui_language(), "welcome_message"));

    let assistant = Assistant::from_env()?;
    let reply = assistant.handle(&command, &[]).await;

    println!("\n{}", reply.text);
    println!(
        "   Intent: {} ({}% confidence){}",
        reply.intent,
        (reply.confidence * 100.0).round() as u32,
        if reply.ai_powered { ", AI powered" } else { "" }
    );

    if let Some(action) = reply.action {
        apply_action(&store, &mut state, action)?;
    }

    if reply.confidence < CONFIDENCE_THRESHOLD {
        println!("\n💡 Try saying:");
        for suggestion in suggestions(&[]) {
            println!("   \"{}\"", suggestion);
        }
    }

    Ok(())
}

/// Apply an assistant action to local state and the store
fn apply_action(
    store: &LocalStore,
    state: &mut AppState,
    action: AssistantAction,
) -> anyhow::Result<()> {
    match action {
        AssistantAction::Clear => {
            println!("   Action: input fields cleared");
        }
        AssistantAction::SetTheme(theme) => {
            state.set_theme(theme);
            store.set_theme(theme)?;
            println!("   Action: theme set to {}", theme);
        }
        AssistantAction::ShowHistory => {
            print_history(store)?;
        }
        AssistantAction::ShowFavorites => {
            print_favorites(store)?;
        }
        AssistantAction::Speak => {
            println!("   Action: reading the translation aloud");
        }
        AssistantAction::SetTargetLanguage(code) => {
            println!(
                "   Action: target language set to {}",
                languages::display_name(&code)
            );
        }
    }

    Ok(())
}

/// Handle the history command
pub async fn handle_history(clear: bool) -> anyhow::Result<()> {
    let store = LocalStore::from_env()?;

    if clear {
        store.clear_history()?;
        println!("✅ Translation history cleared");
        return Ok(());
    }

    print_history(&store)
}

fn print_history(store: &LocalStore) -> anyhow::Result<()> {
    let state = store.load()?;

    if state.history.is_empty() {
        println!("No translations yet. Try: polyglot translate \"Hello\" -t es");
        return Ok(());
    }

    println!("📝 Recent translations:");
    for (i, record) in state.history.iter().enumerate() {
        println!("\n{}. {} -> {}", i + 1, record.input, record.output);
        println!("   Languages: {} -> {}", record.from_lang, record.to_lang);
        println!("   When: {}", record.timestamp.format("%Y-%m-%d %H:%M UTC"));
    }

    Ok(())
}

/// Handle the favorites command
pub async fn handle_favorites() -> anyhow::Result<()> {
    let store = LocalStore::from_env()?;
    print_favorites(&store)
}

fn print_favorites(store: &LocalStore) -> anyhow::Result<()> {
    let state = store.load()?;

    if state.favorites.is_empty() {
        println!("No favorites yet. Save one with: polyglot translate \"Hello\" -t es --save");
        return Ok(());
    }

    println!("⭐ Saved favorites:");
    for (i, record) in state.favorites.iter().enumerate() {
        println!("\n{}. {} -> {}", i + 1, record.input, record.output);
        println!("   Languages: {} -> {}", record.from_lang, record.to_lang);
    }

    Ok(())
}

/// Handle the connectivity probe
pub async fn handle_probe() -> anyhow::Result<()> {
    use tracing::info;

    println!("🔍 Checking translation provider connectivity...");
    info!("Running connectivity probe");

    let resolver = TranslationResolver::from_env()?;

    if resolver.probe().await {
        println!("✅ Translation providers are reachable");
    } else {
        println!("❌ No provider produced a translation");
        println!("   The services may be down, or the probe text came back unchanged.");
    }

    Ok(())
}

/// Handle the languages listing
pub async fn handle_languages() -> anyhow::Result<()> {
    println!("🌍 Supported translation languages:");
    for (code, name) in languages::supported_languages() {
        println!("   {:<8} {}", code, name);
    }

    println!(
        "\nInterface messages available in {} languages",
        localization::ui_languages().len()
    );

    Ok(())
}

/// Handle the stats display
pub async fn handle_stats() -> anyhow::Result<()> {
    let store = LocalStore::from_env()?;
    let stats = store.stats()?;

    println!("📊 Usage statistics:");
    println!("   Translations recorded: {}", stats.total_translations);
    println!("   Favorites saved: {}", stats.favorite_count);
    println!("   Languages supported: {}", stats.languages_supported);

    Ok(())
}
