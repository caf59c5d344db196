//! # client
//!
//! Leptos frontend for the link-in-bio profile page: a profile card, a list
//! of outbound links, a persisted light/dark theme that can follow the clock,
//! and a pointer glow.
//!
//! Built twice: with `ssr` for server rendering inside the `linkpage` binary,
//! and with `hydrate` as the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod profile;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
