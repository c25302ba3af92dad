#![allow(warnings)]
//! AutoFF Frontend Entry Point

mod models;
mod gathering;
mod bridge;
mod commands;
mod sync;
mod config;
mod routes;
mod context;
mod store;
mod components;
mod views;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_location();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::debug!("[APP] Starting with {:?}", config);

    // The bridge is detected once on mount, so wait until pywebview's API exists
    if bridge::pywebview_pending() {
        if let Some(window) = web_sys::window() {
            log::debug!("[APP] Waiting for pywebviewready");
            let mount = Closure::once_into_js(move || mount_app(config));
            if window.add_event_listener_with_callback("pywebviewready", mount.unchecked_ref()).is_ok() {
                return;
            }
            log::warn!("[APP] Could not wait for pywebviewready, mounting now");
            return mount_app(AppConfig::from_location());
        }
    }
    mount_app(config);
}

fn mount_app(config: AppConfig) {
    mount_to_body(move || view! { <App config=config.clone() /> });
}
