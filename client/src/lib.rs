//! # client
//!
//! Leptos + WASM frontend for the ElectroHub marketplace: a login screen and
//! a placeholder home feed.
//!
//! This crate contains the pages, the session and request state, and the
//! HTTP layer used to talk to the backend's auth endpoints. The host server
//! renders [`app::shell`] and the browser bundle calls [`hydrate`].

pub mod app;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger init failed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
