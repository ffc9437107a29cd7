// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Popup host trait for the action popup surface.

use async_trait::async_trait;

use crate::error::PlamoError;
use crate::types::PopupCapability;

/// Host-side control of the extension's action popup.
#[async_trait]
pub trait PopupHost: Send + Sync {
    /// Probe whether the host can auto-open the popup right now.
    async fn capability(&self) -> PopupCapability;

    /// Try to open the popup. The call carries no payload; the popup reads
    /// the latest slot from storage itself.
    async fn open_popup(&self) -> Result<(), PlamoError>;
}
