//! # client
//!
//! Leptos + WASM frontend for the military asset management console.
//!
//! This crate contains the session store, the role-based route guard, the
//! route table, pages, and REST calls to the asset backend. The `ssr`
//! feature is consumed by the host binary; the `hydrate` feature builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: logging, panic hook, then hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
