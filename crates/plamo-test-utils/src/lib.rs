// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles and a builder-style harness for the PLaMo Translate backend.
//!
//! Everything here is deterministic and in-memory: a HashMap storage area
//! (plus a variant that fails writes to chosen keys), a canned-response
//! translation provider, and recording display/popup surfaces. The
//! [`TestHarness`] wires them into a ready [`Background`](plamo_background::Background).

pub mod harness;
pub mod mock_display;
pub mod mock_popup;
pub mod mock_provider;
pub mod storage;

pub use harness::{TestHarness, TestHarnessBuilder};
pub use mock_display::MockDisplaySink;
pub use mock_popup::MockPopupHost;
pub use mock_provider::{MockProvider, RecordedCall};
pub use storage::{FlakyStorageArea, MemoryStorageArea};
