// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence layer for the PLaMo Translate backend.
//!
//! Provides the file-backed [`FileStorageArea`], typed key helpers over any
//! [`StorageArea`](plamo_core::StorageArea), the settings load/save layer,
//! and the serialized [`HistoryStore`].

pub mod area;
pub mod history;
pub mod settings;

pub use area::{FileStorageArea, read_key, write_key};
pub use history::HistoryStore;

/// Keys of the shared key-value store. The names are the extension's storage
/// schema and must not change.
pub mod keys {
    /// User settings ([`Settings`](plamo_core::Settings)).
    pub const SETTINGS: &str = "settings";
    /// History list, newest first, at most `MAX_HISTORY_ENTRIES` entries.
    pub const HISTORY: &str = "history";
    /// Duplicate of the newest history entry, or null.
    pub const LATEST_TRANSLATION: &str = "latestTranslation";
    /// Why the last auto-open attempt fell back to the overlay, or null.
    pub const AUTO_OPEN_NOTICE: &str = "autoOpenPopupNotice";
}
