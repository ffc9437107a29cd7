// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings persistence: load with defaults, validated save, first-install
//! ensure.
//!
//! Loading never fails on a partial record: missing fields decode to their
//! defaults (see the serde attributes on [`Settings`]), which is how schema
//! evolution works without migrations. Validation runs only on the save
//! path, matching the UI's behavior.

use plamo_core::{PlamoError, Settings, StorageArea};
use tracing::debug;

use crate::area::{read_key, write_key};
use crate::keys;

/// Load settings, filling absent or missing fields from defaults.
pub async fn load(store: &dyn StorageArea) -> Result<Settings, PlamoError> {
    Ok(read_key(store, keys::SETTINGS).await?.unwrap_or_default())
}

/// Validate and persist `settings`.
///
/// All violations are collected into one Config error naming each offending
/// field, not just the first.
pub async fn save(store: &dyn StorageArea, settings: &Settings) -> Result<(), PlamoError> {
    validate(settings)?;
    write_key(store, keys::SETTINGS, settings).await?;
    debug!(
        url = settings.lm_studio_url.as_str(),
        model = settings.model_name.as_str(),
        "settings saved"
    );
    Ok(())
}

/// First-install initialization: read the (possibly partial or absent)
/// record and write the fully merged value back, so later readers see every
/// field populated.
pub async fn ensure(store: &dyn StorageArea) -> Result<Settings, PlamoError> {
    let settings = load(store).await?;
    write_key(store, keys::SETTINGS, &settings).await?;
    Ok(settings)
}

/// Semantic checks the type system cannot express.
pub fn validate(settings: &Settings) -> Result<(), PlamoError> {
    let mut errors = Vec::new();

    if settings.lm_studio_url.trim().is_empty() {
        errors.push("lmStudioUrl must not be empty".to_string());
    }
    if settings.model_name.trim().is_empty() {
        errors.push("modelName must not be empty".to_string());
    }
    if !(100..=4096).contains(&settings.max_tokens) {
        errors.push(format!(
            "maxTokens must be between 100 and 4096, got {}",
            settings.max_tokens
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PlamoError::Config(errors.join("; ")))
    }
}
