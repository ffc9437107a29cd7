// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the PLaMo Translate backend.

use thiserror::Error;

use crate::types::ErrorCategory;

/// The primary error type used across the translation pipeline.
#[derive(Debug, Error)]
pub enum PlamoError {
    /// Configuration errors (invalid setting values, rejected saves).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage area errors (file I/O, corrupt stored JSON).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Translation request failures, classified for user display.
    #[error("translation failed ({category}): {message}")]
    Translation {
        category: ErrorCategory,
        message: String,
    },

    /// A display command could not be delivered to the page surface.
    #[error("display dispatch error: {message}")]
    Display {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The host rejected an auto-open attempt on the action popup.
    #[error("popup open failed: {0}")]
    Popup(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PlamoError {
    /// The error category carried by translation failures, if any.
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            PlamoError::Translation { category, .. } => Some(*category),
            _ => None,
        }
    }
}
