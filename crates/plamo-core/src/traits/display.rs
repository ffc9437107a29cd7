// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display sink trait for the page surface.

use async_trait::async_trait;

use crate::error::PlamoError;
use crate::types::{DisplayCommand, TabId};

/// Delivery channel for display commands targeting a tab's page surface.
///
/// In the extension this is `tabs.sendMessage` toward the content script;
/// the CLI renders to the terminal and tests record the commands.
#[async_trait]
pub trait DisplaySink: Send + Sync {
    /// Deliver `command` to the page in `tab`.
    async fn dispatch(&self, tab: TabId, command: DisplayCommand) -> Result<(), PlamoError>;
}
