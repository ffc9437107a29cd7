// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording display sink.

use async_trait::async_trait;
use tokio::sync::Mutex;

use plamo_core::{DisplayCommand, DisplaySink, PlamoError, TabId};

/// Records every dispatched display command instead of rendering it.
#[derive(Default)]
pub struct MockDisplaySink {
    commands: Mutex<Vec<(TabId, DisplayCommand)>>,
}

impl MockDisplaySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All dispatched commands with their target tabs, in order.
    pub async fn commands(&self) -> Vec<(TabId, DisplayCommand)> {
        self.commands.lock().await.clone()
    }
}

#[async_trait]
impl DisplaySink for MockDisplaySink {
    async fn dispatch(&self, tab: TabId, command: DisplayCommand) -> Result<(), PlamoError> {
        self.commands.lock().await.push((tab, command));
        Ok(())
    }
}
