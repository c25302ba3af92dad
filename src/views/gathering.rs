//! Gathering Page
//!
//! Edits the gathering list and drives the gathering automation.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{GatheringForm, GatheringTable, ProgressPanel};
use crate::context::use_app_context;
use crate::models::{CatalogEntry, ProgressRecord};

#[component]
pub fn GatheringView() -> impl IntoView {
    let ctx = use_app_context();

    let (catalog, set_catalog) = signal(Vec::<CatalogEntry>::new());
    let (is_gathering, set_is_gathering) = signal(false);
    let (progress, set_progress) = signal(HashMap::<String, ProgressRecord>::new());

    // Catalog and running state come from the backend; without it the form
    // still accepts free text.
    Effect::new(move |_| {
        if !ctx.bridge_available { return; }
        spawn_local(async move {
            match commands::get_gathering_items().await {
                Ok(entries) => {
                    log::debug!("[GATHERING] Loaded {} catalog entries", entries.len());
                    set_catalog.set(entries);
                }
                Err(e) => {
                    log::error!("[GATHERING] Failed to load catalog: {}", e);
                    ctx.toaster.error(e);
                }
            }
            match commands::get_gathering_status().await {
                Ok(running) => set_is_gathering.set(running),
                Err(e) => log::warn!("[GATHERING] Failed to read status: {}", e),
            }
        });
    });

    view! {
        <section class="page gathering-page">
            <h1>"Gathering"</h1>
            <GatheringForm catalog=catalog />
            <GatheringTable progress=progress />
            <ProgressPanel
                is_gathering=is_gathering
                set_is_gathering=set_is_gathering
                set_progress=set_progress
            />
        </section>
    }
}
