//! Main entry point for the Polyglot CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod assistant;
mod cli;
mod core;

use cli::commands::Commands;

/// Polyglot - multi-provider translation tool with a conversational assistant
#[derive(Parser, Debug)]
#[command(name = "polyglot", version, about, long_about = None)]
struct Args {
    /// Custom translation endpoint to try first (optional, defaults to TRANSLATE_ENDPOINT env var)
    #[arg(long)]
    endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Data directory for history and favorites
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_PKG_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Override config with CLI args if provided
    if let Some(endpoint) = args.endpoint {
        std::env::set_var("TRANSLATE_ENDPOINT", endpoint);
    }

    if let Some(data_dir) = args.data_dir {
        std::env::set_var("POLYGLOT_DATA_DIR", data_dir);
    }

    // Execute command
    match args.command {
        Some(Commands::Translate {
            text,
            source_lang,
            target_lang,
            save,
        }) => {
            cli::commands::handle_translate(text, source_lang, target_lang, save).await?;
        }
        Some(Commands::Batch {
            file,
            output,
            source_lang,
            target_lang,
        }) => {
            cli::commands::handle_batch(file, output, source_lang, target_lang).await?;
        }
        Some(Commands::Assistant {
            command,
            ui_language,
        }) => {
            cli::commands::handle_assistant(command, ui_language).await?;
        }
        Some(Commands::History { clear }) => {
            cli::commands::handle_history(clear).await?;
        }
        Some(Commands::Favorites) => {
            cli::commands::handle_favorites().await?;
        }
        Some(Commands::Probe) => {
            cli::commands::handle_probe().await?;
        }
        Some(Commands::Languages) => {
            cli::commands::handle_languages().await?;
        }
        Some(Commands::Stats) => {
            cli::commands::handle_stats().await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
