// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configurable popup host.

use async_trait::async_trait;
use tokio::sync::Mutex;

use plamo_core::{PlamoError, PopupCapability, PopupHost};

/// Popup host with a scriptable capability and open outcome.
///
/// Defaults to `Supported` with successful opens.
pub struct MockPopupHost {
    capability: Mutex<PopupCapability>,
    open_failure: Mutex<Option<String>>,
    open_attempts: Mutex<u32>,
}

impl MockPopupHost {
    pub fn new() -> Self {
        Self {
            capability: Mutex::new(PopupCapability::Supported),
            open_failure: Mutex::new(None),
            open_attempts: Mutex::new(0),
        }
    }

    /// What the next capability probe reports.
    pub async fn set_capability(&self, capability: PopupCapability) {
        *self.capability.lock().await = capability;
    }

    /// Make every subsequent `open_popup` fail with `message`.
    pub async fn fail_opens(&self, message: impl Into<String>) {
        *self.open_failure.lock().await = Some(message.into());
    }

    /// Let `open_popup` succeed again.
    pub async fn succeed_opens(&self) {
        *self.open_failure.lock().await = None;
    }

    /// How many times `open_popup` was attempted.
    pub async fn open_attempts(&self) -> u32 {
        *self.open_attempts.lock().await
    }
}

impl Default for MockPopupHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PopupHost for MockPopupHost {
    async fn capability(&self) -> PopupCapability {
        *self.capability.lock().await
    }

    async fn open_popup(&self) -> Result<(), PlamoError> {
        *self.open_attempts.lock().await += 1;
        match &*self.open_failure.lock().await {
            Some(message) => Err(PlamoError::Popup(message.clone())),
            None => Ok(()),
        }
    }
}
