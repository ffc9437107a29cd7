// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! LM Studio provider adapter.
//!
//! Implements [`TranslationProvider`](plamo_core::TranslationProvider) over
//! the server's OpenAI-compatible API: chat completions for translation and
//! the models listing for connection diagnostics.

pub mod client;
pub mod types;

pub use client::{LmStudioClient, REQUEST_TIMEOUT};
