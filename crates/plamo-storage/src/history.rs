// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only, size-bounded translation history with a latest slot.
//!
//! The underlying storage area has no compare-and-swap, so every append runs
//! its whole read-modify-write under a fair FIFO mutex owned by this store.
//! The `HistoryStore` is the single writer of the `history` and
//! `latestTranslation` keys; appends apply in submission order and never read
//! a stale snapshot from a concurrent append.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use plamo_core::{HistoryEntry, MAX_HISTORY_ENTRIES, PlamoError, StorageArea};

use crate::area::{read_key, write_key};
use crate::keys;

/// Single-writer view over the persisted history list and latest slot.
pub struct HistoryStore {
    storage: Arc<dyn StorageArea>,
    write_queue: Mutex<()>,
}

impl HistoryStore {
    pub fn new(storage: Arc<dyn StorageArea>) -> Self {
        Self {
            storage,
            write_queue: Mutex::new(()),
        }
    }

    /// Prepend `entry`, truncate to [`MAX_HISTORY_ENTRIES`], persist the list
    /// and the latest slot. Returns the entry as stored.
    pub async fn append(&self, entry: HistoryEntry) -> Result<HistoryEntry, PlamoError> {
        let _queue = self.write_queue.lock().await;

        let mut entries: Vec<HistoryEntry> = read_key(&*self.storage, keys::HISTORY)
            .await?
            .unwrap_or_default();
        entries.insert(0, entry.clone());
        entries.truncate(MAX_HISTORY_ENTRIES);

        write_key(&*self.storage, keys::HISTORY, &entries).await?;
        write_key(&*self.storage, keys::LATEST_TRANSLATION, &entry).await?;

        debug!(id = %entry.id, total = entries.len(), "history entry appended");
        Ok(entry)
    }

    /// The stored list, newest first.
    pub async fn list(&self) -> Result<Vec<HistoryEntry>, PlamoError> {
        Ok(read_key(&*self.storage, keys::HISTORY)
            .await?
            .unwrap_or_default())
    }

    /// The latest slot, if a translation has completed since the last clear.
    pub async fn latest(&self) -> Result<Option<HistoryEntry>, PlamoError> {
        read_key(&*self.storage, keys::LATEST_TRANSLATION).await
    }

    /// Reset the list to empty and the latest slot to null.
    ///
    /// Deliberately does not take the write queue: the UI clears from
    /// outside the append path, and clearing during an in-flight translation
    /// is an accepted last-write-wins race.
    pub async fn clear(&self) -> Result<(), PlamoError> {
        write_key(&*self.storage, keys::HISTORY, &Vec::<HistoryEntry>::new()).await?;
        self.storage
            .set(keys::LATEST_TRANSLATION, Value::Null)
            .await?;
        debug!("history cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::FileStorageArea;
    use plamo_core::Language;
    use tempfile::tempdir;

    async fn open_store(dir: &tempfile::TempDir) -> HistoryStore {
        let area = FileStorageArea::open(dir.path().join("storage.json"))
            .await
            .unwrap();
        HistoryStore::new(Arc::new(area))
    }

    fn entry(original: &str, translated: &str) -> HistoryEntry {
        HistoryEntry::new(
            original.to_string(),
            translated.to_string(),
            Language::Japanese,
            Language::English,
            "https://example.com/page".to_string(),
        )
    }

    #[tokio::test]
    async fn append_prepends_newest_first() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir).await;

        store.append(entry("一", "one")).await.unwrap();
        store.append(entry("二", "two")).await.unwrap();
        store.append(entry("三", "three")).await.unwrap();

        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].original_text, "三");
        assert_eq!(entries[2].original_text, "一");
    }

    #[tokio::test]
    async fn append_updates_latest_slot() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir).await;

        let appended = store.append(entry("猫", "cat")).await.unwrap();
        let latest = store.latest().await.unwrap().unwrap();

        assert_eq!(latest.id, appended.id);
        assert_eq!(latest.original_text, "猫");
        assert_eq!(latest.translated_text, "cat");
        assert_eq!(latest.url, "https://example.com/page");
    }

    #[tokio::test]
    async fn list_is_capped_and_drops_oldest() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir).await;

        for i in 0..MAX_HISTORY_ENTRIES + 5 {
            store
                .append(entry(&format!("original {i}"), &format!("translated {i}")))
                .await
                .unwrap();
        }

        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), MAX_HISTORY_ENTRIES);
        // Newest survives, the first five appended are gone.
        assert_eq!(entries[0].original_text, "original 54");
        assert_eq!(
            entries.last().unwrap().original_text,
            "original 5",
            "oldest entries are silently dropped from the tail"
        );
    }

    #[tokio::test]
    async fn concurrent_appends_lose_no_writes() {
        let dir = tempdir().unwrap();
        let store = Arc::new(open_store(&dir).await);

        let tasks: Vec<_> = (0..5)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .append(entry(&format!("text {i}"), &format!("out {i}")))
                        .await
                        .unwrap()
                })
            })
            .collect();
        let appended = futures::future::join_all(tasks).await;

        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 5, "no lost writes");

        let mut ids: Vec<_> = entries.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5, "no duplicate ids");

        // Whichever append committed last owns the latest slot.
        let latest = store.latest().await.unwrap().unwrap();
        assert!(appended.iter().any(|r| r.as_ref().unwrap().id == latest.id));
    }

    #[tokio::test]
    async fn clear_empties_list_and_nulls_latest() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir).await;

        store.append(entry("犬", "dog")).await.unwrap();
        store.clear().await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(store.latest().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clear_on_empty_store_is_fine() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir).await;
        store.clear().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_after_clear_starts_a_fresh_list() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir).await;

        store.append(entry("古い", "old")).await.unwrap();
        store.clear().await.unwrap();
        store.append(entry("新しい", "new")).await.unwrap();

        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].original_text, "新しい");
    }
}
