//! # glasspane
//!
//! Leptos + WASM client for the glass multi-page site: password gate,
//! guest/login/register screens, the home page, and the theme/settings
//! machinery shared by all of them.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no server. Everything persists in the browser's `localStorage`
//! and `sessionStorage`. Browser glue is compiled only with the `csr`
//! feature; without it every browser touchpoint is a no-op so the core can
//! be exercised by plain unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod site;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
