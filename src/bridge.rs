//! Backend Bridge
//!
//! Capability interface over the native shell's IPC. Two shells are known:
//! pywebview exposes `window.pywebview.api.update_gathering_items` directly,
//! Tauri injects `window.__TAURI__.core.invoke`. Outside both (plain browser
//! dev server) `detect` returns `None`.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::commands;
use crate::models::{BridgeResponse, GatheringPayload};

const UPDATE_COMMAND: &str = "update_gathering_items";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The call threw or its promise rejected
    #[error("{0}")]
    Rejected(String),
    #[error("failed to encode request: {0}")]
    Serialize(String),
    #[error("unexpected response: {0}")]
    Deserialize(String),
}

/// Backend endpoint that receives the gathering list
#[async_trait(?Send)]
pub trait GatheringBridge: Send + Sync {
    async fn update_gathering_items(
        &self,
        payload: &GatheringPayload,
    ) -> Result<BridgeResponse, BridgeError>;
}

/// Which shell hosts the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeKind {
    Pywebview,
    Tauri,
}

impl BridgeKind {
    /// pywebview is only chosen when it exposes the update function itself;
    /// Tauri cannot be asked which commands it registered.
    pub fn select(pywebview_update: bool, tauri_invoke: bool) -> Option<Self> {
        match (pywebview_update, tauri_invoke) {
            (true, _) => Some(BridgeKind::Pywebview),
            (false, true) => Some(BridgeKind::Tauri),
            (false, false) => None,
        }
    }
}

/// Bridge backed by `window.pywebview.api`
#[derive(Debug, Clone, Copy, Default)]
pub struct PywebviewBridge;

#[async_trait(?Send)]
impl GatheringBridge for PywebviewBridge {
    async fn update_gathering_items(
        &self,
        payload: &GatheringPayload,
    ) -> Result<BridgeResponse, BridgeError> {
        commands::update_gathering_items_pywebview(payload).await
    }
}

/// Bridge backed by Tauri IPC
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriBridge;

#[async_trait(?Send)]
impl GatheringBridge for TauriBridge {
    async fn update_gathering_items(
        &self,
        payload: &GatheringPayload,
    ) -> Result<BridgeResponse, BridgeError> {
        commands::update_gathering_items(payload).await
    }
}

/// pywebview injects `window.pywebview` before its API; the API is usable
/// once the `pywebviewready` event fires.
pub fn pywebview_pending() -> bool {
    commands::pywebview_present() && !commands::pywebview_has(UPDATE_COMMAND)
}

/// Look for a usable bridge once, at startup.
pub fn detect() -> Option<Arc<dyn GatheringBridge>> {
    match BridgeKind::select(commands::pywebview_has(UPDATE_COMMAND), commands::tauri_available()) {
        Some(BridgeKind::Pywebview) => {
            log::info!("pywebview API detected, gathering list will be sent to the backend");
            Some(Arc::new(PywebviewBridge))
        }
        Some(BridgeKind::Tauri) => {
            log::info!("Tauri IPC detected, gathering list will be sent to the backend");
            Some(Arc::new(TauriBridge))
        }
        None => {
            log::warn!("No backend bridge found, running without backend");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_prefers_pywebview_update_function() {
        assert_eq!(BridgeKind::select(true, false), Some(BridgeKind::Pywebview));
        assert_eq!(BridgeKind::select(true, true), Some(BridgeKind::Pywebview));
    }

    #[test]
    fn test_select_falls_back_to_tauri() {
        assert_eq!(BridgeKind::select(false, true), Some(BridgeKind::Tauri));
    }

    #[test]
    fn test_select_without_any_shell() {
        assert_eq!(BridgeKind::select(false, false), None);
    }
}
