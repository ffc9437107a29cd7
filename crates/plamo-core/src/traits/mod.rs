// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams toward the host environment and the inference backend.
//!
//! All traits use `#[async_trait]` for dynamic dispatch; the orchestrator
//! holds them as `Arc<dyn ...>` so tests can substitute doubles.

pub mod display;
pub mod popup;
pub mod provider;
pub mod storage;

// Re-export all traits at the traits module level for convenience.
pub use display::DisplaySink;
pub use popup::PopupHost;
pub use provider::TranslationProvider;
pub use storage::StorageArea;
