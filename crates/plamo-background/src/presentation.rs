// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The auto-open vs. overlay presentation decision.
//!
//! Auto-opening the action popup is the preferred surface for a completed
//! translation, but the host may lack the primitive, have the action icon
//! unpinned, or reject the call. The in-page overlay is the guaranteed
//! delivery fallback; whenever it fires because auto-open did not silently
//! succeed, the reason is persisted as an [`AutoOpenNotice`] for the UI.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use plamo_core::{
    AutoOpenNotice, DisplayCommand, DisplaySink, NoticeKind, PopupCapability, PopupHost,
    Settings, StorageArea, TabId,
};
use plamo_storage::{keys, write_key};

/// Which surface a completed translation was delivered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The popup opened; the overlay was suppressed.
    Popup,
    /// The overlay command was dispatched to the page.
    Overlay,
}

/// Decides the display channel for each completed translation.
pub struct Presenter {
    storage: Arc<dyn StorageArea>,
    sink: Arc<dyn DisplaySink>,
    popup: Arc<dyn PopupHost>,
}

impl Presenter {
    pub fn new(
        storage: Arc<dyn StorageArea>,
        sink: Arc<dyn DisplaySink>,
        popup: Arc<dyn PopupHost>,
    ) -> Self {
        Self {
            storage,
            sink,
            popup,
        }
    }

    /// Run the decision for one translation. Terminal after one branch:
    ///
    /// 1. auto-open disabled -> overlay, no notice change
    /// 2. capability Unsupported -> UNSUPPORTED notice, overlay
    /// 3. capability HiddenFromToolbar -> ACTION_HIDDEN notice, overlay
    /// 4. attempt open: success -> notice cleared, no overlay;
    ///    failure -> OPEN_FAILED notice, overlay
    pub async fn present(
        &self,
        tab: TabId,
        command: DisplayCommand,
        settings: &Settings,
    ) -> Delivery {
        if !settings.auto_open_popup {
            debug!("auto-open disabled, using overlay");
            self.dispatch_overlay(tab, command).await;
            return Delivery::Overlay;
        }

        match self.popup.capability().await {
            PopupCapability::Unsupported => {
                debug!("auto-open unsupported by host, using overlay");
                self.record_notice(AutoOpenNotice::new(NoticeKind::Unsupported))
                    .await;
                self.dispatch_overlay(tab, command).await;
                Delivery::Overlay
            }
            PopupCapability::HiddenFromToolbar => {
                debug!("action icon not pinned, using overlay");
                self.record_notice(AutoOpenNotice::new(NoticeKind::ActionHidden))
                    .await;
                self.dispatch_overlay(tab, command).await;
                Delivery::Overlay
            }
            PopupCapability::Supported => match self.popup.open_popup().await {
                Ok(()) => {
                    debug!("popup auto-opened");
                    self.clear_notice().await;
                    Delivery::Popup
                }
                Err(e) => {
                    warn!(error = %e, "popup open failed, using overlay");
                    self.record_notice(AutoOpenNotice::open_failed(e.to_string()))
                        .await;
                    self.dispatch_overlay(tab, command).await;
                    Delivery::Overlay
                }
            },
        }
    }

    /// Overlay dispatch is best effort: a failed delivery is logged, nothing
    /// further can be done for this invocation.
    async fn dispatch_overlay(&self, tab: TabId, command: DisplayCommand) {
        if let Err(e) = self.sink.dispatch(tab, command).await {
            error!(error = %e, tab = tab.0, "failed to dispatch overlay command");
        }
    }

    /// Notice persistence never blocks delivery; failures are logged.
    async fn record_notice(&self, notice: AutoOpenNotice) {
        if let Err(e) = write_key(&*self.storage, keys::AUTO_OPEN_NOTICE, &notice).await {
            warn!(error = %e, kind = %notice.kind, "failed to persist auto-open notice");
        }
    }

    async fn clear_notice(&self) {
        if let Err(e) = self.storage.set(keys::AUTO_OPEN_NOTICE, Value::Null).await {
            warn!(error = %e, "failed to clear auto-open notice");
        }
    }
}
