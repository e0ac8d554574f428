//! # sprout-client
//!
//! Leptos frontend for the SproutBotanica plant-care app: the cookie-backed
//! session, the route guard shared with the server, the REST client with its
//! session interceptors, and the account pages built on them.
//!
//! Built with `ssr` for the server binary and with `hydrate` for the WASM
//! bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: attach the app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
