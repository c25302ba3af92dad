//! Progress Panel Component
//!
//! Start/stop control for the gathering automation plus a progress refresh.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::ProgressRecord;

#[component]
pub fn ProgressPanel(
    is_gathering: ReadSignal<bool>,
    set_is_gathering: WriteSignal<bool>,
    set_progress: WriteSignal<HashMap<String, ProgressRecord>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (busy, set_busy) = signal(false);

    let refresh = move || {
        spawn_local(async move {
            match commands::get_gathering_progress().await {
                Ok(items) => set_progress.set(items),
                Err(e) => {
                    log::error!("[GATHERING] Failed to load progress: {}", e);
                    ctx.toaster.error(e);
                }
            }
        });
    };

    let toggle = move |_| {
        set_busy.set(true);
        spawn_local(async move {
            match commands::toggle_gathering().await {
                Ok(running) => {
                    let state = if running { "started" } else { "stopped" };
                    log::info!("[GATHERING] Gathering {}", state);
                    ctx.toaster.info(format!("Gathering {}", state));
                    set_is_gathering.set(running);
                }
                Err(e) => {
                    log::error!("[GATHERING] Toggle failed: {}", e);
                    ctx.toaster.error(e);
                }
            }
            set_busy.set(false);
            refresh();
        });
    };

    view! {
        <div class="progress-panel">
            <button
                class=move || if is_gathering.get() { "toggle-btn running" } else { "toggle-btn" }
                disabled=move || !ctx.bridge_available || busy.get()
                on:click=toggle
            >
                {move || if is_gathering.get() { "Stop gathering" } else { "Start gathering" }}
            </button>
            <button
                class="refresh-btn"
                disabled=move || !ctx.bridge_available
                on:click=move |_| refresh()
            >
                "Refresh progress"
            </button>
        </div>
    }
}
