//! Home Page

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn HomeView() -> impl IntoView {
    let ctx = use_app_context();
    let queued = move || ctx.gathering.len();

    view! {
        <section class="page home-page">
            <h1>"AutoFF"</h1>
            <p>"Gathering, crafting and fishing helper."</p>
            <Show when=move || !ctx.bridge_available>
                <p class="notice">"Backend not detected. Changes stay in this window only."</p>
            </Show>
            <div class="home-card" on:click=move |_| ctx.navigate(Route::Gathering)>
                <h2>"Gathering list"</h2>
                <p>{move || match queued() {
                    0 => "Nothing queued".to_string(),
                    1 => "1 item queued".to_string(),
                    n => format!("{} items queued", n),
                }}</p>
            </div>
        </section>
    }
}
