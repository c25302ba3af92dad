//! Gathering Sync
//!
//! Forwards gathering list snapshots to the backend. Calls are
//! fire-and-forget: nothing is retried, sequenced or fed back into the list.

use std::sync::Arc;

use leptos::task::spawn_local;

use crate::bridge::GatheringBridge;
use crate::gathering::NotifyHook;
use crate::models::{BridgeResponse, GatheringItem, GatheringPayload};

const REJECTED_FALLBACK: &str = "Backend rejected the gathering list update";

/// Destination for user-visible error messages
pub trait ErrorSink: Send + Sync {
    fn error(&self, message: String);
}

/// How a single dispatch ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Delivered,
    /// Backend answered `success: false`
    Rejected(String),
    /// Call failed before the backend could answer
    Failed(String),
    /// No bridge in this environment
    Skipped,
}

#[derive(Clone)]
pub struct GatheringSync {
    bridge: Option<Arc<dyn GatheringBridge>>,
    errors: Arc<dyn ErrorSink>,
}

impl GatheringSync {
    pub fn new(bridge: Option<Arc<dyn GatheringBridge>>, errors: Arc<dyn ErrorSink>) -> Self {
        Self { bridge, errors }
    }

    pub fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    pub async fn dispatch(&self, payload: GatheringPayload) -> SyncOutcome {
        let Some(bridge) = &self.bridge else {
            match serde_json::to_string(&payload) {
                Ok(json) => log::info!("Bridge not available, gathering list not sent: {}", json),
                Err(e) => log::info!("Bridge not available, gathering list not sent ({} items, {})", payload.len(), e),
            }
            return SyncOutcome::Skipped;
        };

        match bridge.update_gathering_items(&payload).await {
            Ok(BridgeResponse { success: true, .. }) => {
                log::debug!("Gathering list sent ({} items)", payload.len());
                SyncOutcome::Delivered
            }
            Ok(BridgeResponse { message, .. }) => {
                let message = message.unwrap_or_else(|| REJECTED_FALLBACK.to_string());
                log::error!("Failed to update gathering list: {}", message);
                self.errors.error(message.clone());
                SyncOutcome::Rejected(message)
            }
            Err(e) => {
                log::error!("Error while updating gathering list: {}", e);
                let message = format!("Failed to update gathering list: {}", e);
                self.errors.error(message.clone());
                SyncOutcome::Failed(message)
            }
        }
    }

    /// Hook for `GatheringList`: snapshot the list and dispatch in the background
    pub fn notifier(&self) -> NotifyHook {
        let sync = self.clone();
        Arc::new(move |items: &[GatheringItem]| {
            let payload = GatheringPayload::from_items(items);
            let sync = sync.clone();
            spawn_local(async move {
                sync.dispatch(payload).await;
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BridgeError;
    use crate::gathering::GatheringList;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        messages: Mutex<Vec<String>>,
    }

    impl ErrorSink for RecordingSink {
        fn error(&self, message: String) {
            self.messages.lock().unwrap().push(message);
        }
    }

    struct MockBridge {
        reply: Result<BridgeResponse, BridgeError>,
        received: Mutex<Vec<GatheringPayload>>,
    }

    impl MockBridge {
        fn replying(reply: Result<BridgeResponse, BridgeError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                received: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait(?Send)]
    impl GatheringBridge for MockBridge {
        async fn update_gathering_items(
            &self,
            payload: &GatheringPayload,
        ) -> Result<BridgeResponse, BridgeError> {
            self.received.lock().unwrap().push(payload.clone());
            self.reply.clone()
        }
    }

    fn item(id: u64, name: &str, quantity: i64) -> GatheringItem {
        GatheringItem {
            id,
            name: name.to_string(),
            job: "Botanist".to_string(),
            level: 3,
            quantity,
        }
    }

    fn sync_with(bridge: Option<Arc<MockBridge>>) -> (GatheringSync, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let bridge = bridge.map(|b| b as Arc<dyn GatheringBridge>);
        (GatheringSync::new(bridge, sink.clone()), sink)
    }

    #[tokio::test]
    async fn test_dispatch_delivered() {
        let bridge = MockBridge::replying(Ok(BridgeResponse { success: true, message: None }));
        let (sync, sink) = sync_with(Some(bridge.clone()));
        let payload = GatheringPayload::from_items(&[item(1, "Latex", 4)]);

        let outcome = sync.dispatch(payload.clone()).await;

        assert_eq!(outcome, SyncOutcome::Delivered);
        assert_eq!(bridge.received.lock().unwrap().as_slice(), &[payload]);
        assert!(sink.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_backend_rejects() {
        let bridge = MockBridge::replying(Ok(BridgeResponse {
            success: false,
            message: Some("emulator not connected".to_string()),
        }));
        let (sync, sink) = sync_with(Some(bridge));

        let outcome = sync.dispatch(GatheringPayload::from_items(&[item(1, "Latex", 4)])).await;

        assert_eq!(outcome, SyncOutcome::Rejected("emulator not connected".to_string()));
        assert_eq!(sink.messages.lock().unwrap().as_slice(), &["emulator not connected".to_string()]);
    }

    #[tokio::test]
    async fn test_dispatch_rejects_without_message() {
        let bridge = MockBridge::replying(Ok(BridgeResponse { success: false, message: None }));
        let (sync, sink) = sync_with(Some(bridge));

        let outcome = sync.dispatch(GatheringPayload::default()).await;

        assert_eq!(outcome, SyncOutcome::Rejected(REJECTED_FALLBACK.to_string()));
        assert_eq!(sink.messages.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_transport_failure() {
        let bridge = MockBridge::replying(Err(BridgeError::Rejected("ipc closed".to_string())));
        let (sync, sink) = sync_with(Some(bridge));

        let outcome = sync.dispatch(GatheringPayload::from_items(&[item(1, "Latex", 4)])).await;

        let expected = "Failed to update gathering list: ipc closed".to_string();
        assert_eq!(outcome, SyncOutcome::Failed(expected.clone()));
        assert_eq!(sink.messages.lock().unwrap().as_slice(), &[expected]);
    }

    #[tokio::test]
    async fn test_dispatch_without_bridge_is_skipped() {
        let (sync, sink) = sync_with(None);
        assert!(!sync.has_bridge());

        let outcome = sync.dispatch(GatheringPayload::from_items(&[item(1, "Latex", 4)])).await;

        assert_eq!(outcome, SyncOutcome::Skipped);
        assert!(sink.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_notifier_dispatches_once_per_mutation() {
        let _ = any_spawner::Executor::init_tokio();
        let bridge = MockBridge::replying(Ok(BridgeResponse { success: false, message: None }));
        let (sync, sink) = sync_with(Some(bridge.clone()));
        let mut list = GatheringList::new(sync.notifier());

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                list.add_item(item(1, "Latex", 4));
                list.add_item(item(2, "Latex", 2));
                list.remove_item(99);
                list.add_item(item(3, "Rosewood Log", 1));
            })
            .await;
        local.await;

        assert_eq!(list.items(), &[item(1, "Latex", 6), item(3, "Rosewood Log", 1)]);

        let received = bridge.received.lock().unwrap();
        assert_eq!(received.len(), 4);
        assert_eq!(received[0].get("Latex").unwrap().need, 4);
        assert_eq!(received[1].get("Latex").unwrap().need, 6);
        assert_eq!(received[2], received[1]);
        assert_eq!(received[3].len(), 2);
        assert_eq!(sink.messages.lock().unwrap().len(), 4);
    }
}
