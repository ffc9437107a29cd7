// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for the translation inference backend.

use async_trait::async_trait;

use crate::error::PlamoError;
use crate::language::Language;
use crate::types::{ModelInfo, Settings, TranslationSuccess};

/// Backend that turns selected text into a translation.
///
/// The production implementation speaks the OpenAI-compatible API of a local
/// LM Studio server; tests substitute canned responses.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from `source` to `target` under the given settings.
    ///
    /// Every failure is classified: the error arm is always
    /// [`PlamoError::Translation`] carrying an
    /// [`ErrorCategory`](crate::types::ErrorCategory).
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
        settings: &Settings,
    ) -> Result<TranslationSuccess, PlamoError>;

    /// List the models served at `base_url`. Connectivity diagnostics, not
    /// part of the translation path.
    async fn list_models(&self, base_url: &str) -> Result<Vec<ModelInfo>, PlamoError>;
}
