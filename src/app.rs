//! AutoFF Frontend App
//!
//! Builds the session state, provides it through context and renders the
//! page for the current route.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bridge;
use crate::components::{NavBar, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::gathering::GatheringList;
use crate::routes::{self, Route};
use crate::store::{GatheringStore, Toaster, UiState};
use crate::sync::GatheringSync;
use crate::views::{
    CraftingView, FishingView, GatheringView, GoldSaucerView, HomeView, LogsView, NotFoundView,
    SettingsView,
};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let toaster = Toaster::new(Store::new(UiState::default()), config.toast_duration_ms);
    let sync = GatheringSync::new(bridge::detect(), Arc::new(toaster));
    let bridge_available = sync.has_bridge();
    let gathering = GatheringStore::new(GatheringList::new(sync.notifier()));
    let route = signal(Route::from_path(&routes::current_path()));

    let ctx = AppContext::new(gathering, toaster, bridge_available, route);
    provide_context(ctx);

    // Back/forward buttons
    let _ = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_route_from_location());

    let page = move || match ctx.current_route.get() {
        Some(Route::Home) => view! { <HomeView /> }.into_any(),
        Some(Route::Gathering) => view! { <GatheringView /> }.into_any(),
        Some(Route::Crafting) => view! { <CraftingView /> }.into_any(),
        Some(Route::Fishing) => view! { <FishingView /> }.into_any(),
        Some(Route::GoldSaucer) => view! { <GoldSaucerView /> }.into_any(),
        Some(Route::Logs) => view! { <LogsView /> }.into_any(),
        Some(Route::Settings) => view! { <SettingsView /> }.into_any(),
        None => view! { <NotFoundView /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">{page}</main>
            <ToastHost />
        </div>
    }
}
