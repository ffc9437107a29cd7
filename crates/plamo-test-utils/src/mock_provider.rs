// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock translation provider with canned responses.
//!
//! Outcomes are popped from a FIFO queue; an empty queue yields a default
//! success. Every call is recorded for assertions.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use plamo_core::types::{ErrorCategory, ModelInfo, Settings, TranslationSuccess};
use plamo_core::{Language, PlamoError, TranslationProvider};

/// One recorded `translate` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub text: String,
    pub source: Language,
    pub target: Language,
    pub settings: Settings,
}

enum Outcome {
    Translation(String),
    Failure(ErrorCategory, String),
}

/// Canned-response implementation of [`TranslationProvider`].
pub struct MockProvider {
    outcomes: Mutex<VecDeque<Outcome>>,
    models: Mutex<Vec<ModelInfo>>,
    calls: Mutex<Vec<RecordedCall>>,
    listed_urls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            models: Mutex::new(vec![ModelInfo {
                id: Settings::default().model_name,
                object: "model".to_string(),
            }]),
            calls: Mutex::new(Vec::new()),
            listed_urls: Mutex::new(Vec::new()),
        }
    }

    /// Pre-load successful translations, returned in order.
    pub fn with_translations(translations: Vec<String>) -> Self {
        let mut provider = Self::new();
        *provider.outcomes.get_mut() =
            translations.into_iter().map(Outcome::Translation).collect();
        provider
    }

    /// Queue a successful translation.
    pub async fn enqueue_translation(&self, translation: impl Into<String>) {
        self.outcomes
            .lock()
            .await
            .push_back(Outcome::Translation(translation.into()));
    }

    /// Queue a classified failure.
    pub async fn enqueue_failure(&self, category: ErrorCategory, message: impl Into<String>) {
        self.outcomes
            .lock()
            .await
            .push_back(Outcome::Failure(category, message.into()));
    }

    /// Replace the model list served by `list_models`.
    pub async fn set_models(&self, models: Vec<ModelInfo>) {
        *self.models.lock().await = models;
    }

    /// All recorded `translate` calls, in order.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    /// The base URLs `list_models` was called with, in order.
    pub async fn listed_urls(&self) -> Vec<String> {
        self.listed_urls.lock().await.clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
        settings: &Settings,
    ) -> Result<TranslationSuccess, PlamoError> {
        self.calls.lock().await.push(RecordedCall {
            text: text.to_string(),
            source,
            target,
            settings: settings.clone(),
        });

        match self.outcomes.lock().await.pop_front() {
            Some(Outcome::Translation(translation)) => Ok(TranslationSuccess {
                translation,
                processing_time_ms: 5,
            }),
            Some(Outcome::Failure(category, message)) => {
                Err(PlamoError::Translation { category, message })
            }
            None => Ok(TranslationSuccess {
                translation: "mock translation".to_string(),
                processing_time_ms: 5,
            }),
        }
    }

    async fn list_models(&self, base_url: &str) -> Result<Vec<ModelInfo>, PlamoError> {
        self.listed_urls.lock().await.push(base_url.to_string());
        Ok(self.models.lock().await.clone())
    }
}
