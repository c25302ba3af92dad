//! Gathering Table Component
//!
//! Current gathering list with inline quantity edit, reordering and removal.
//! Every edit goes through `update_items` / `remove_item` on the store.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::gathering::{move_entry, set_quantity};
use crate::models::ProgressRecord;

#[component]
pub fn GatheringTable(progress: ReadSignal<HashMap<String, ProgressRecord>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.gathering;

    let rows = move || {
        let items = store.items();
        let last = items.len().saturating_sub(1);
        items.iter().enumerate().map(|(index, item)| {
            let id = item.id;
            let done = progress.with(|p| p.get(&item.name).map(|r| r.complete).unwrap_or(0));

            let on_quantity = move |ev: web_sys::Event| {
                // Ignore partial input such as "-" until it parses
                if let Ok(amount) = event_target_value(&ev).trim().parse::<i64>() {
                    store.update_items(set_quantity(&store.items(), id, amount));
                }
            };
            let move_up = move |_| store.update_items(move_entry(&store.items(), index, index.saturating_sub(1)));
            let move_down = move |_| store.update_items(move_entry(&store.items(), index, index + 1));

            view! {
                <tr class="gathering-row">
                    <td class="col-name">{item.name.clone()}</td>
                    <td class="col-job">{item.job.clone()}</td>
                    <td class="col-level">{item.level}</td>
                    <td class="col-quantity">
                        <input type="number" prop:value=item.quantity.to_string() on:change=on_quantity />
                    </td>
                    <td class="col-progress">{format!("{}/{}", done, item.quantity)}</td>
                    <td class="col-actions">
                        <button class="move-btn" disabled={index == 0} on:click=move_up>"↑"</button>
                        <button class="move-btn" disabled={index == last} on:click=move_down>"↓"</button>
                        <DeleteConfirmButton
                            title="Remove from list"
                            on_confirm=move |_| store.remove_item(id)
                        />
                    </td>
                </tr>
            }
        }).collect_view()
    };

    view! {
        <Show
            when=move || !store.is_empty()
            fallback=|| view! { <p class="empty-hint">"Nothing queued yet. Add an item above."</p> }
        >
            <table class="gathering-table">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Job"</th>
                        <th>"Level"</th>
                        <th>"Quantity"</th>
                        <th>"Done"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Show>
    }
}
