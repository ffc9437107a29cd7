// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder-style harness wiring the mocks into a ready [`Background`].

use std::sync::Arc;

use plamo_background::Background;
use plamo_core::{AutoOpenNotice, PopupCapability, Settings, StorageArea, TabId};
use plamo_storage::{keys, read_key, write_key};

use crate::mock_display::MockDisplaySink;
use crate::mock_popup::MockPopupHost;
use crate::mock_provider::MockProvider;
use crate::storage::{FlakyStorageArea, MemoryStorageArea};

/// The tab every harness-driven trigger targets.
pub const TEST_TAB: TabId = TabId(7);

/// The page URL every harness-driven trigger carries.
pub const TEST_PAGE_URL: &str = "https://example.com/article";

/// Configures the doubles behind a [`TestHarness`].
pub struct TestHarnessBuilder {
    translations: Vec<String>,
    settings: Settings,
    capability: PopupCapability,
    open_failure: Option<String>,
    failing_keys: Vec<String>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            translations: Vec::new(),
            settings: Settings::default(),
            capability: PopupCapability::Supported,
            open_failure: None,
            failing_keys: Vec::new(),
        }
    }

    /// Queue successful provider responses, returned in order.
    pub fn with_translations(mut self, translations: Vec<String>) -> Self {
        self.translations = translations;
        self
    }

    /// Seed the stored settings record.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Shorthand for toggling `autoOpenPopup` on the seeded settings.
    pub fn with_auto_open(mut self, auto_open: bool) -> Self {
        self.settings.auto_open_popup = auto_open;
        self
    }

    /// What the popup host's capability probe reports.
    pub fn with_capability(mut self, capability: PopupCapability) -> Self {
        self.capability = capability;
        self
    }

    /// Make every popup open attempt fail with `message`.
    pub fn with_failing_open(mut self, message: impl Into<String>) -> Self {
        self.open_failure = Some(message.into());
        self
    }

    /// Make storage writes to `key` fail.
    pub fn with_failing_key(mut self, key: impl Into<String>) -> Self {
        self.failing_keys.push(key.into());
        self
    }

    pub async fn build(self) -> TestHarness {
        let storage: Arc<dyn StorageArea> = if self.failing_keys.is_empty() {
            Arc::new(MemoryStorageArea::new())
        } else {
            Arc::new(FlakyStorageArea::new(self.failing_keys))
        };

        write_key(&*storage, keys::SETTINGS, &self.settings)
            .await
            .expect("seeding settings must not target a failing key");

        let provider = Arc::new(MockProvider::with_translations(self.translations));
        let sink = Arc::new(MockDisplaySink::new());
        let popup = Arc::new(MockPopupHost::new());
        popup.set_capability(self.capability).await;
        if let Some(message) = self.open_failure {
            popup.fail_opens(message).await;
        }

        let background = Background::new(
            storage.clone(),
            provider.clone(),
            sink.clone(),
            popup.clone(),
        );

        TestHarness {
            background,
            storage,
            provider,
            sink,
            popup,
        }
    }
}

/// A fully wired backend over in-memory doubles.
pub struct TestHarness {
    /// The orchestrator under test.
    pub background: Background,
    /// The shared key-value store.
    pub storage: Arc<dyn StorageArea>,
    /// The canned-response provider.
    pub provider: Arc<MockProvider>,
    /// Records overlay display commands.
    pub sink: Arc<MockDisplaySink>,
    /// Scriptable popup host.
    pub popup: Arc<MockPopupHost>,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Drive the full `handle` pipeline with the standard test tab and URL.
    pub async fn handle(&self, text: &str) {
        self.background.handle(text, TEST_TAB, TEST_PAGE_URL).await;
    }

    /// The persisted auto-open notice, if any (stored null reads as `None`).
    pub async fn notice(&self) -> Option<AutoOpenNotice> {
        read_key(&*self.storage, keys::AUTO_OPEN_NOTICE)
            .await
            .expect("notice key must decode")
    }

    /// Whether the notice key holds an explicit null (cleared after a
    /// successful auto-open) as opposed to never having been written.
    pub async fn notice_is_explicit_null(&self) -> bool {
        matches!(
            self.storage
                .get(keys::AUTO_OPEN_NOTICE)
                .await
                .expect("storage read must succeed"),
            Some(serde_json::Value::Null)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plamo_core::DisplayCommand;

    #[tokio::test]
    async fn harness_seeds_settings_and_translates() {
        let harness = TestHarness::builder()
            .with_translations(vec!["Hello".to_string()])
            .with_auto_open(false)
            .build()
            .await;

        harness.handle("こんにちは").await;

        let commands = harness.sink.commands().await;
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].0, TEST_TAB);
        assert!(matches!(
            &commands[0].1,
            DisplayCommand::ShowTranslation { translated_text, .. }
                if translated_text == "Hello"
        ));
    }

    #[tokio::test]
    async fn harnesses_are_isolated() {
        let h1 = TestHarness::builder()
            .with_translations(vec!["one".to_string()])
            .build()
            .await;
        let h2 = TestHarness::builder()
            .with_translations(vec!["two".to_string()])
            .build()
            .await;

        h1.handle("最初").await;

        assert_eq!(h1.background.history().list().await.unwrap().len(), 1);
        assert!(h2.background.history().list().await.unwrap().is_empty());
    }
}
