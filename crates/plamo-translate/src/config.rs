// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process configuration: storage path and log level.
//!
//! Layered with Figment: compiled defaults, then the XDG hierarchy, then
//! `PLAMO_`-prefixed environment variables. This is configuration of the
//! process itself; the user-facing translation settings live in the storage
//! area and are managed through `plamo-translate config`.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Process-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Where the key-value storage area file lives.
    pub storage_path: PathBuf,
    /// Log level for the tracing subscriber (trace/debug/info/warn/error).
    pub log_level: String,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            storage_path: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("plamo-translate")
                .join("storage.json"),
            log_level: "info".to_string(),
        }
    }
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `~/.config/plamo-translate/config.toml` (user XDG config)
/// 3. `./plamo-translate.toml` (local directory)
/// 4. `PLAMO_*` environment variables
pub fn load() -> Result<ProcessConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ProcessConfig::default()))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("plamo-translate/config.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("plamo-translate.toml"))
        .merge(Env::prefixed("PLAMO_"))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_from_path(path: &Path) -> Result<ProcessConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ProcessConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PLAMO_"))
        .extract()
}

/// Initialize the tracing subscriber from the configured log level.
/// `RUST_LOG` wins when set.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
