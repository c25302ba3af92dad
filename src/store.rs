//! Application State Stores
//!
//! `GatheringStore` wraps the gathering list in a signal so views re-render
//! on mutation. Toasts live in a `reactive_stores` store for field-level
//! reactivity.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::gathering::GatheringList;
use crate::models::{GatheringItem, ItemId};
use crate::sync::ErrorSink;

// ========================
// Gathering
// ========================

/// Reactive handle to the session's gathering list
#[derive(Clone, Copy)]
pub struct GatheringStore {
    list: RwSignal<GatheringList>,
    next_id: StoredValue<ItemId>,
}

impl GatheringStore {
    pub fn new(list: GatheringList) -> Self {
        Self {
            list: RwSignal::new(list),
            next_id: StoredValue::new(1),
        }
    }

    /// Current items (tracked)
    pub fn items(&self) -> Vec<GatheringItem> {
        self.list.with(|list| list.items().to_vec())
    }

    pub fn len(&self) -> usize {
        self.list.with(|list| list.len())
    }

    pub fn is_empty(&self) -> bool {
        self.list.with(|list| list.is_empty())
    }

    pub fn add_item(&self, item: GatheringItem) {
        self.list.update(|list| list.add_item(item));
    }

    pub fn remove_item(&self, id: ItemId) {
        self.list.update(|list| list.remove_item(id));
    }

    pub fn update_items(&self, items: Vec<GatheringItem>) {
        self.list.update(|list| list.update_items(items));
    }

    /// Fresh id for an item created in this session
    pub fn allocate_id(&self) -> ItemId {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        id
    }
}

// ========================
// Toasts
// ========================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// UI-only state
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Toasts currently on screen, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

pub type UiStore = Store<UiState>;

/// Pushes toasts and schedules their removal
#[derive(Clone, Copy)]
pub struct Toaster {
    store: UiStore,
    duration_ms: u32,
}

impl Toaster {
    pub fn new(store: UiStore, duration_ms: u32) -> Self {
        Self { store, duration_ms }
    }

    pub fn store(&self) -> UiStore {
        self.store
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        store_remove_toast(&self.store, id);
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = store_push_toast(&self.store, kind, message);
        let store = self.store;
        Timeout::new(self.duration_ms, move || store_remove_toast(&store, id)).forget();
    }
}

impl ErrorSink for Toaster {
    fn error(&self, message: String) {
        self.push(ToastKind::Error, message);
    }
}

/// Append a toast with a fresh ID and return that ID
pub fn store_push_toast(store: &UiStore, kind: ToastKind, message: String) -> u32 {
    let next_toast_id = store.next_toast_id();
    next_toast_id.update(|next| *next += 1);
    let id = next_toast_id.get_untracked();
    store.toasts().write().push(Toast { id, kind, message });
    id
}

/// Remove a toast from the store by ID
pub fn store_remove_toast(store: &UiStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
