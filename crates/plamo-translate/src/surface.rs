// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal renditions of the extension's two display surfaces.
//!
//! The CLI plays both the content script and the action popup: the sink
//! renders overlay display commands to stdout, and the popup host renders
//! the latest slot the way the popup surface would.

use std::sync::Arc;

use async_trait::async_trait;
use colored::Colorize;

use plamo_core::{
    DisplayCommand, DisplaySink, HistoryEntry, PlamoError, PopupCapability, PopupHost,
    StorageArea, TabId,
};
use plamo_storage::{keys, read_key};

/// Renders overlay display commands to the terminal.
pub struct TerminalDisplaySink {
    json: bool,
}

impl TerminalDisplaySink {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

#[async_trait]
impl DisplaySink for TerminalDisplaySink {
    async fn dispatch(&self, _tab: TabId, command: DisplayCommand) -> Result<(), PlamoError> {
        if self.json {
            let raw = serde_json::to_string(&command).map_err(|e| PlamoError::Display {
                message: format!("failed to encode display command: {e}"),
                source: Some(Box::new(e)),
            })?;
            println!("{raw}");
            return Ok(());
        }

        match command {
            DisplayCommand::ShowTranslation {
                original_text,
                translated_text,
                source_lang,
                target_lang,
                processing_time,
            } => {
                println!();
                println!(
                    "  {} {} -> {} ({processing_time}ms)",
                    "✓".green(),
                    source_lang,
                    target_lang
                );
                println!("    {}", original_text.dimmed());
                println!("    {translated_text}");
                println!();
            }
            DisplayCommand::ShowError { error } => {
                println!();
                println!("  {} {}", "✗".red(), error.red());
                println!();
            }
        }
        Ok(())
    }
}

/// Plays the action popup: `open_popup` renders the latest slot.
pub struct TerminalPopupHost {
    storage: Arc<dyn StorageArea>,
    json: bool,
}

impl TerminalPopupHost {
    pub fn new(storage: Arc<dyn StorageArea>, json: bool) -> Self {
        Self { storage, json }
    }
}

#[async_trait]
impl PopupHost for TerminalPopupHost {
    async fn capability(&self) -> PopupCapability {
        PopupCapability::Supported
    }

    async fn open_popup(&self) -> Result<(), PlamoError> {
        // The popup reads the latest slot itself; an empty slot means there
        // is nothing to show and the overlay fallback should fire instead.
        let latest: Option<HistoryEntry> =
            read_key(&*self.storage, keys::LATEST_TRANSLATION).await?;
        let entry = latest.ok_or_else(|| {
            PlamoError::Popup("latest translation slot is empty".to_string())
        })?;

        if self.json {
            let raw = serde_json::to_string(&entry)
                .map_err(|e| PlamoError::Popup(format!("failed to encode entry: {e}")))?;
            println!("{raw}");
            return Ok(());
        }

        println!();
        println!(
            "  {} {} -> {}",
            "PLaMo Translate".bold(),
            entry.source_lang,
            entry.target_lang
        );
        println!("    {}", entry.original_text.dimmed());
        println!("    {}", entry.translated_text);
        println!();
        Ok(())
    }
}
