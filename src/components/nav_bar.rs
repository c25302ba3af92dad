//! Navigation Bar Component
//!
//! Sidebar with one link per route.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            <div class="nav-title">"AutoFF"</div>
            {Route::ALL.into_iter().map(|route| {
                let is_active = move || ctx.current_route.get() == Some(route);
                view! {
                    <a
                        href=route.path()
                        class=move || if is_active() { "nav-link active" } else { "nav-link" }
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(route);
                        }
                    >
                        {route.title()}
                    </a>
                }
            }).collect_view()}
            <div class="nav-status">
                {if ctx.bridge_available { "Backend connected" } else { "Browser mode" }}
            </div>
        </nav>
    }
}
