//! # client
//!
//! Leptos + WASM frontend for the document chat application.
//!
//! This crate contains pages, components, session state, the HTTP calls to
//! the document API and toast notifications. The pan/zoom math for the
//! document preview lives in the `preview` crate so it can be tested natively.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    log::info!("hydrating docchat client");
    leptos::mount::hydrate_body(app::App);
}
