//! # client
//!
//! Leptos frontend for the Apolo growth landing page: the home page with its
//! calculators and lead form, the growth simulator, and the legal hub.
//!
//! Rendered on the server (`ssr`) and hydrated in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating apolo-landing");
    leptos::mount::hydrate_body(app::App);
}
