//! # orbyq
//!
//! Leptos + WASM client for the orbyq personal productivity app. The
//! desktop shell launches the Spring backend on localhost and loads this
//! UI in a webview; everything here talks to that backend over JSON (and
//! one multipart endpoint for canvas files).
//!
//! The crate splits into pages, components, application state, and the
//! network layer. State modules are plain data with pure transitions so
//! the interesting behavior (drag splicing, optimistic rollback, the
//! refresh-once auth policy, undo history) tests natively without a
//! browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("orbyq client starting");
    leptos::mount::mount_to_body(app::App);
}
