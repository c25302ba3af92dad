//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::routes::{self, Route};
use crate::store::{GatheringStore, Toaster};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The session's gathering list
    pub gathering: GatheringStore,
    /// Toast notifications
    pub toaster: Toaster,
    /// Whether the backend bridge was found at startup
    pub bridge_available: bool,
    /// Current page (None = unknown path) - read
    pub current_route: ReadSignal<Option<Route>>,
    /// Current page - write
    set_current_route: WriteSignal<Option<Route>>,
}

impl AppContext {
    pub fn new(
        gathering: GatheringStore,
        toaster: Toaster,
        bridge_available: bool,
        current_route: (ReadSignal<Option<Route>>, WriteSignal<Option<Route>>),
    ) -> Self {
        Self {
            gathering,
            toaster,
            bridge_available,
            current_route: current_route.0,
            set_current_route: current_route.1,
        }
    }

    /// Switch page and record it in the browser history
    pub fn navigate(&self, route: Route) {
        if self.current_route.get_untracked() == Some(route) {
            return;
        }
        routes::push_history(route);
        self.set_current_route.set(Some(route));
    }

    /// Re-read the route from the location bar (back/forward)
    pub fn sync_route_from_location(&self) {
        self.set_current_route.set(Route::from_path(&routes::current_path()));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
