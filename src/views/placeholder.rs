//! Placeholder Pages
//!
//! Routes whose pages only carry a heading for now.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
fn PlaceholderPage(route: Route, #[prop(into)] blurb: String) -> impl IntoView {
    view! {
        <section class="page placeholder-page">
            <h1>{route.title()}</h1>
            <p>{blurb}</p>
        </section>
    }
}

#[component]
pub fn CraftingView() -> impl IntoView {
    view! { <PlaceholderPage route=Route::Crafting blurb="Crafting automation." /> }
}

#[component]
pub fn FishingView() -> impl IntoView {
    view! { <PlaceholderPage route=Route::Fishing blurb="Fishing automation." /> }
}

#[component]
pub fn GoldSaucerView() -> impl IntoView {
    view! { <PlaceholderPage route=Route::GoldSaucer blurb="Gold Saucer mini games." /> }
}

#[component]
pub fn LogsView() -> impl IntoView {
    view! { <PlaceholderPage route=Route::Logs blurb="Backend activity log." /> }
}

#[component]
pub fn SettingsView() -> impl IntoView {
    view! { <PlaceholderPage route=Route::Settings blurb="Emulator and application settings." /> }
}

#[component]
pub fn NotFoundView() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <section class="page not-found-page">
            <h1>"Page not found"</h1>
            <button on:click=move |_| ctx.navigate(Route::Home)>"Back to Home"</button>
        </section>
    }
}
