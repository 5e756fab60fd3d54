//! GIF Portal browser app
//!
//! Connects a Phantom wallet, reads the shared GIF list from the Solana
//! program and lets the connected user append links to it.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("GIF Portal starting...");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    if let Some(loading_element) = document.get_element_by_id("leptos-loading") {
        if let Err(e) = loading_element.class_list().add_1("hidden") {
            log::warn!("Failed to hide loading screen: {:?}", e);
        }
    }
}
