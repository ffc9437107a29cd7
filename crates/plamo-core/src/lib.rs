// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the PLaMo Translate backend.
//!
//! This crate provides the shared error type, the persisted data model and
//! its wire schema, the trait seams toward the host surfaces, and the two
//! pure pieces of the pipeline: language detection and prompt construction.

pub mod error;
pub mod language;
pub mod messages;
pub mod prompt;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PlamoError;
pub use language::{Language, detect_language};
pub use prompt::{SEGMENT_MARKER, build_translation_prompt};
pub use types::{
    AutoOpenNotice, DisplayCommand, ErrorCategory, HistoryEntry, MAX_HISTORY_ENTRIES, ModelInfo,
    NoticeKind, PopupCapability, Settings, TabId, TranslationSuccess,
};

// Re-export all trait seams at crate root.
pub use traits::{DisplaySink, PopupHost, StorageArea, TranslationProvider};
