//! Toast Host Component
//!
//! Renders queued toasts in the corner; click to dismiss.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{ToastKind, UiStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let toaster = ctx.toaster;
    let store = toaster.store();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Info => "toast info",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| toaster.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
