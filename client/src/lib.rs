//! # client
//!
//! Leptos + WASM front end for DEV Events.
//!
//! Pages are thin views over the REST API; every call goes through the
//! `gateway` crate so session handling is shared with the CLI. Browser-only
//! glue (`gloo-net`, `localStorage`, timers) sits behind the `csr` feature,
//! which keeps the page logic testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("client: mounting app");
    leptos::mount::mount_to_body(app::App);
}
