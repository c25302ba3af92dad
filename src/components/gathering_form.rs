//! Gathering Form Component
//!
//! Adds an item to the gathering list. Names matching a catalog entry
//! fill in job and level automatically.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{CatalogEntry, GatheringItem, ItemId};

const CATALOG_LIST_ID: &str = "gathering-catalog";

/// Raw form inputs
struct ItemDraft {
    name: String,
    job: String,
    level: String,
    quantity: String,
}

impl ItemDraft {
    /// `Ok(None)` for a blank name, `Err` for a number field that does not parse
    fn parse(&self, id: ItemId) -> Result<Option<GatheringItem>, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let level = self.level.trim().parse::<i32>().map_err(|_| "Level must be a whole number")?;
        let quantity = self.quantity.trim().parse::<i64>().map_err(|_| "Quantity must be a whole number")?;
        Ok(Some(GatheringItem {
            id,
            name: name.to_string(),
            job: self.job.trim().to_string(),
            level,
            quantity,
        }))
    }
}

#[component]
pub fn GatheringForm(catalog: ReadSignal<Vec<CatalogEntry>>) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (job, set_job) = signal(String::new());
    let (level, set_level) = signal(String::from("1"));
    let (quantity, set_quantity) = signal(String::from("1"));

    let on_name_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let matched = catalog.with(|entries| entries.iter().find(|e| e.value == value).cloned());
        if let Some(entry) = matched {
            set_job.set(entry.job);
            set_level.set(entry.level.to_string());
        }
        set_name.set(value);
    };

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft {
            name: name.get(),
            job: job.get(),
            level: level.get(),
            quantity: quantity.get(),
        };
        match draft.parse(ctx.gathering.allocate_id()) {
            Ok(Some(item)) => {
                ctx.gathering.add_item(item);
                set_name.set(String::new());
                set_quantity.set(String::from("1"));
            }
            Ok(None) => {}
            Err(message) => ctx.toaster.error(message),
        }
    };

    view! {
        <form class="gathering-form" on:submit=add_item>
            <input
                type="text"
                class="gathering-name"
                placeholder="Item name"
                list=CATALOG_LIST_ID
                prop:value=move || name.get()
                on:input=on_name_input
            />
            <datalist id=CATALOG_LIST_ID>
                {move || catalog.get().into_iter().map(|entry| view! {
                    <option value=entry.value>{format!("{} · {} Lv.{}", entry.label, entry.job, entry.level)}</option>
                }).collect_view()}
            </datalist>
            <input
                type="text"
                class="gathering-job"
                placeholder="Job"
                prop:value=move || job.get()
                on:input=move |ev| set_job.set(event_target_value(&ev))
            />
            <input
                type="number"
                class="gathering-level"
                title="Level"
                prop:value=move || level.get()
                on:input=move |ev| set_level.set(event_target_value(&ev))
            />
            <input
                type="number"
                class="gathering-quantity"
                title="Quantity"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
