// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the translation pipeline.
//!
//! Persisted types serialize with the camelCase field names of the
//! extension's storage schema; the serde renames are part of that contract.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::language::Language;
use crate::messages;

/// Identifier of the browser tab a translation was triggered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(pub i64);

/// Maximum number of entries retained in the history list.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// User-adjustable settings persisted under the `settings` key.
///
/// Every field carries a serde default so records written by older versions
/// decode with the missing fields filled in. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Base URL of the LM Studio server.
    #[serde(default = "default_lm_studio_url")]
    pub lm_studio_url: String,

    /// Model identifier sent with every completion request.
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Completion token budget. Accepted range on save: 100..=4096.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Whether to try opening the action popup after a translation.
    #[serde(default = "default_auto_open_popup")]
    pub auto_open_popup: bool,
}

fn default_lm_studio_url() -> String {
    "http://localhost:1234".to_string()
}

fn default_model_name() -> String {
    "mmnga/plamo-2-translate-gguf".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.0
}

fn default_auto_open_popup() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lm_studio_url: default_lm_studio_url(),
            model_name: default_model_name(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            auto_open_popup: default_auto_open_popup(),
        }
    }
}

/// Successful outcome of a single translation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationSuccess {
    /// The translated text, trimmed of surrounding whitespace.
    pub translation: String,
    /// Wall-clock time the request took, in milliseconds.
    pub processing_time_ms: u64,
}

/// Classification of a failed translation request.
///
/// Selects the user-facing message shown on the page; the raw failure detail
/// stays in the error for logs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    Timeout,
    ConnectionFailed,
    ServerError,
    InvalidResponse,
    Unknown,
}

impl ErrorCategory {
    /// The localized message shown to the user for this category.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorCategory::Timeout => messages::TIMEOUT,
            ErrorCategory::ConnectionFailed => messages::CONNECTION_FAILED,
            ErrorCategory::ServerError => messages::MODEL_ERROR,
            ErrorCategory::InvalidResponse | ErrorCategory::Unknown => {
                messages::TRANSLATION_FAILED
            }
        }
    }
}

/// A completed translation as persisted in the `history` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Entries stored before ids were introduced get a fresh one on decode.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: Language,
    pub target_lang: Language,
    /// Unix time in milliseconds.
    pub timestamp: i64,
    /// URL of the page the text was selected on.
    #[serde(default)]
    pub url: String,
}

impl HistoryEntry {
    /// Build an entry for a just-completed translation, stamped with a fresh
    /// id and the current wall-clock time.
    pub fn new(
        original_text: String,
        translated_text: String,
        source_lang: Language,
        target_lang: Language,
        url: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_text,
            translated_text,
            source_lang,
            target_lang,
            timestamp: Utc::now().timestamp_millis(),
            url,
        }
    }
}

/// Why the popup did not open on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoticeKind {
    Unsupported,
    ActionHidden,
    OpenFailed,
}

/// Record persisted under `autoOpenPopupNotice` whenever an auto-open attempt
/// does not silently succeed; set to null again on the next successful open.
/// The UI reads it to explain why the overlay fallback appeared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoOpenNotice {
    #[serde(rename = "type")]
    pub kind: NoticeKind,
    /// Present only for OPEN_FAILED, carrying the host's failure detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Unix time in milliseconds.
    pub timestamp: i64,
}

impl AutoOpenNotice {
    /// A notice of the given kind stamped with the current time.
    pub fn new(kind: NoticeKind) -> Self {
        Self {
            kind,
            message: None,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// An OPEN_FAILED notice carrying the host's failure detail.
    pub fn open_failed(message: String) -> Self {
        Self {
            kind: NoticeKind::OpenFailed,
            message: Some(message),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// Command sent to the page surface to render a result or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum DisplayCommand {
    /// Render the in-page overlay with a completed translation.
    #[serde(rename_all = "camelCase")]
    ShowTranslation {
        original_text: String,
        translated_text: String,
        source_lang: Language,
        target_lang: Language,
        /// Wall-clock milliseconds the request took.
        processing_time: u64,
    },
    /// Render an error overlay.
    ShowError { error: String },
}

/// One model advertised by the server's `/v1/models` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default)]
    pub object: String,
}

/// Host support for programmatically opening the action popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupCapability {
    /// The host can open the popup and the action icon is visible.
    Supported,
    /// The host has no auto-open primitive.
    Unsupported,
    /// Auto-open exists but the action icon is not pinned to the toolbar.
    HiddenFromToolbar,
}
