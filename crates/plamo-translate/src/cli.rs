// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line surface: the trigger, diagnostics, history, and settings
//! commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;

use plamo_background::Background;
use plamo_core::{PlamoError, Settings, StorageArea, TabId, messages};
use plamo_lmstudio::LmStudioClient;
use plamo_storage::{FileStorageArea, HistoryStore, settings};

use crate::config::ProcessConfig;
use crate::surface::{TerminalDisplaySink, TerminalPopupHost};

/// Translate selected text between Japanese and English via a local
/// LM Studio server.
#[derive(Parser, Debug)]
#[command(name = "plamo-translate", version, about, long_about = None)]
pub struct Cli {
    /// Path to the process config file (overrides the XDG hierarchy).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text through the full pipeline (detection, history,
    /// presentation).
    Translate {
        /// The text to translate.
        text: String,
        /// URL recorded with the history entry.
        #[arg(long, default_value = "")]
        page_url: String,
        /// Tab identifier the display commands target.
        #[arg(long, default_value_t = 0)]
        tab: i64,
        /// Emit raw display-command JSON instead of human output.
        #[arg(long)]
        json: bool,
    },
    /// List the models served by the LM Studio server.
    Models {
        /// Server URL (defaults to the configured one).
        #[arg(long)]
        url: Option<String>,
    },
    /// Inspect or clear the translation history.
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Show or change the translation settings.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Print the history, newest first.
    List {
        /// Emit the raw entry list as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Delete all history entries and the latest slot.
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the current settings.
    Show,
    /// Change one or more settings (validated on save).
    Set {
        /// Base URL of the LM Studio server.
        #[arg(long)]
        server_url: Option<String>,
        /// Model identifier sent with completion requests.
        #[arg(long)]
        model: Option<String>,
        /// Completion token budget (100..=4096).
        #[arg(long)]
        max_tokens: Option<u32>,
        /// Sampling temperature.
        #[arg(long)]
        temperature: Option<f32>,
        /// Whether to auto-open the popup after a translation.
        #[arg(long)]
        auto_open_popup: Option<bool>,
    },
}

/// Dispatch the parsed command against the configured storage area.
pub async fn run(command: Commands, process: &ProcessConfig) -> Result<(), PlamoError> {
    let storage: Arc<dyn StorageArea> =
        Arc::new(FileStorageArea::open(&process.storage_path).await?);

    match command {
        Commands::Translate {
            text,
            page_url,
            tab,
            json,
        } => run_translate(storage, &text, &page_url, TabId(tab), json).await,
        Commands::Models { url } => run_models(storage, url.as_deref()).await,
        Commands::History { command } => run_history(storage, command).await,
        Commands::Config { command } => run_config(storage, command).await,
    }
}

fn background(storage: Arc<dyn StorageArea>, json: bool) -> Result<Background, PlamoError> {
    let provider = Arc::new(LmStudioClient::new()?);
    let sink = Arc::new(TerminalDisplaySink::new(json));
    let popup = Arc::new(TerminalPopupHost::new(storage.clone(), json));
    Ok(Background::new(storage, provider, sink, popup))
}

async fn run_translate(
    storage: Arc<dyn StorageArea>,
    text: &str,
    page_url: &str,
    tab: TabId,
    json: bool,
) -> Result<(), PlamoError> {
    let background = background(storage, json)?;
    // First-run initialization, same as the extension's install hook.
    background.ensure_settings().await?;
    background.handle(text, tab, page_url).await;
    Ok(())
}

async fn run_models(
    storage: Arc<dyn StorageArea>,
    url_override: Option<&str>,
) -> Result<(), PlamoError> {
    let background = background(storage, false)?;
    match background.test_connection(url_override).await {
        Ok(models) if models.is_empty() => {
            println!("  no models loaded");
            Ok(())
        }
        Ok(models) => {
            for model in models {
                println!("  {} {}", "✓".green(), model.id);
            }
            Ok(())
        }
        Err(e) => {
            let detail = match e.category() {
                Some(plamo_core::ErrorCategory::Timeout) => {
                    messages::CONNECTION_TEST_TIMEOUT.to_string()
                }
                _ => e.to_string(),
            };
            println!(
                "  {} {}{detail}",
                "✗".red(),
                messages::CONNECTION_TEST_FAILED_PREFIX
            );
            Ok(())
        }
    }
}

async fn run_history(
    storage: Arc<dyn StorageArea>,
    command: HistoryCommands,
) -> Result<(), PlamoError> {
    let history = HistoryStore::new(storage);
    match command {
        HistoryCommands::List { json } => {
            let entries = history.list().await?;
            if json {
                let raw = serde_json::to_string_pretty(&entries).map_err(|e| {
                    PlamoError::Internal(format!("failed to encode history: {e}"))
                })?;
                println!("{raw}");
                return Ok(());
            }
            if entries.is_empty() {
                println!("  history is empty");
                return Ok(());
            }
            for entry in entries {
                let when = chrono::DateTime::from_timestamp_millis(entry.timestamp)
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "?".to_string());
                println!(
                    "  {} {} -> {}",
                    when.dimmed(),
                    entry.source_lang,
                    entry.target_lang
                );
                println!("    {}", entry.original_text.dimmed());
                println!("    {}", entry.translated_text);
            }
            Ok(())
        }
        HistoryCommands::Clear => {
            history.clear().await?;
            println!("  history cleared");
            Ok(())
        }
    }
}

async fn run_config(
    storage: Arc<dyn StorageArea>,
    command: ConfigCommands,
) -> Result<(), PlamoError> {
    match command {
        ConfigCommands::Show => {
            let current = settings::load(&*storage).await?;
            print_settings(&current);
            Ok(())
        }
        ConfigCommands::Set {
            server_url,
            model,
            max_tokens,
            temperature,
            auto_open_popup,
        } => {
            let mut current = settings::load(&*storage).await?;
            if let Some(url) = server_url {
                current.lm_studio_url = url;
            }
            if let Some(model) = model {
                current.model_name = model;
            }
            if let Some(max_tokens) = max_tokens {
                current.max_tokens = max_tokens;
            }
            if let Some(temperature) = temperature {
                current.temperature = temperature;
            }
            if let Some(auto_open) = auto_open_popup {
                current.auto_open_popup = auto_open;
            }
            settings::save(&*storage, &current).await?;
            print_settings(&current);
            Ok(())
        }
    }
}

fn print_settings(settings: &Settings) {
    println!("  server url       {}", settings.lm_studio_url);
    println!("  model            {}", settings.model_name);
    println!("  max tokens       {}", settings.max_tokens);
    println!("  temperature      {}", settings.temperature);
    println!("  auto-open popup  {}", settings.auto_open_popup);
}
