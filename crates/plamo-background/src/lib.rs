// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Background orchestration for the PLaMo Translate backend.
//!
//! [`Background`] is the entry point every trigger lands on. For a selected
//! piece of text it sequences detection, the provider call, the history
//! write, and the presentation decision, and guarantees the page always
//! receives feedback: any failure anywhere in the pipeline ends in a
//! `ShowError` command, never silence.

pub mod presentation;

use std::sync::Arc;

use tracing::{debug, error, info};

use plamo_core::{
    DisplayCommand, DisplaySink, HistoryEntry, Language, ModelInfo, PlamoError, PopupHost,
    Settings, StorageArea, TabId, TranslationProvider, TranslationSuccess, detect_language,
    messages,
};
use plamo_storage::{HistoryStore, settings};

pub use presentation::{Delivery, Presenter};

/// The translation orchestrator behind every trigger surface.
///
/// Holds its collaborators behind trait objects so the CLI and the test
/// harness can wire in their own surfaces.
pub struct Background {
    storage: Arc<dyn StorageArea>,
    provider: Arc<dyn TranslationProvider>,
    sink: Arc<dyn DisplaySink>,
    history: HistoryStore,
    presenter: Presenter,
}

impl Background {
    pub fn new(
        storage: Arc<dyn StorageArea>,
        provider: Arc<dyn TranslationProvider>,
        sink: Arc<dyn DisplaySink>,
        popup: Arc<dyn PopupHost>,
    ) -> Self {
        let history = HistoryStore::new(storage.clone());
        let presenter = Presenter::new(storage.clone(), sink.clone(), popup);
        Self {
            storage,
            provider,
            sink,
            history,
            presenter,
        }
    }

    /// The history store backing this orchestrator.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Handle one user translation trigger.
    ///
    /// The user always receives feedback: empty selections and every failure
    /// mode end in a `ShowError` command to the page, successes end in the
    /// presentation decision.
    pub async fn handle(&self, text: &str, tab: TabId, page_url: &str) {
        if text.trim().is_empty() {
            debug!(tab = tab.0, "trigger fired with no selected text");
            self.dispatch_error(tab, messages::NO_TEXT_SELECTED.to_string())
                .await;
            return;
        }

        if let Err(e) = self.try_handle(text, tab, page_url).await {
            error!(error = %e, tab = tab.0, "translation pipeline failed");
            let message = match e.category() {
                Some(category) => category.user_message().to_string(),
                None => format!("{}{e}", messages::UNEXPECTED_ERROR_PREFIX),
            };
            self.dispatch_error(tab, message).await;
        }
    }

    async fn try_handle(&self, text: &str, tab: TabId, page_url: &str) -> Result<(), PlamoError> {
        let source = detect_language(text);
        let target = source.opposite();
        info!(%source, %target, tab = tab.0, chars = text.chars().count(), "translating selection");

        let settings = settings::load(&*self.storage).await?;
        let success = self
            .provider
            .translate(text, source, target, &settings)
            .await?;

        let entry = HistoryEntry::new(
            text.to_string(),
            success.translation.clone(),
            source,
            target,
            page_url.to_string(),
        );
        // A persistence failure loses the history record, not the result:
        // presentation still proceeds with the in-memory translation.
        if let Err(e) = self.history.append(entry).await {
            error!(error = %e, "failed to persist history entry");
        }

        let command = DisplayCommand::ShowTranslation {
            original_text: text.to_string(),
            translated_text: success.translation,
            source_lang: source,
            target_lang: target,
            processing_time: success.processing_time_ms,
        };
        self.presenter.present(tab, command, &settings).await;
        Ok(())
    }

    /// Translate without side effects: no history write, no presentation.
    ///
    /// Detection fills in whichever of `source`/`target` the caller omitted.
    pub async fn translate(
        &self,
        text: &str,
        source: Option<Language>,
        target: Option<Language>,
    ) -> Result<TranslationSuccess, PlamoError> {
        let source = source.unwrap_or_else(|| detect_language(text));
        let target = target.unwrap_or_else(|| source.opposite());
        let settings = settings::load(&*self.storage).await?;
        self.provider
            .translate(text, source, target, &settings)
            .await
    }

    /// Connectivity diagnostics: list the models served at the override URL,
    /// or at the configured server when no override is given.
    pub async fn test_connection(
        &self,
        url_override: Option<&str>,
    ) -> Result<Vec<ModelInfo>, PlamoError> {
        let url = match url_override {
            Some(url) => url.to_string(),
            None => settings::load(&*self.storage).await?.lm_studio_url,
        };
        self.provider.list_models(&url).await
    }

    /// First-install initialization of the settings record.
    pub async fn ensure_settings(&self) -> Result<Settings, PlamoError> {
        settings::ensure(&*self.storage).await
    }

    async fn dispatch_error(&self, tab: TabId, error: String) {
        if let Err(e) = self
            .sink
            .dispatch(tab, DisplayCommand::ShowError { error })
            .await
        {
            error!(error = %e, tab = tab.0, "failed to dispatch error command");
        }
    }
}
