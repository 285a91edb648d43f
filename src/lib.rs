//! # wave-portal
//!
//! Leptos + WASM client for a deployed wave portal contract. Connects the
//! browser's injected Ethereum wallet, sends waves (optionally with a
//! message) and lists every wave the contract has recorded.
//!
//! Browser glue is behind the `csr` feature. The provider protocol, contract
//! binding and wallet flows compile natively and are tested against a
//! scripted provider.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
#[cfg(feature = "csr")]
mod tasks;
pub mod util;
pub mod wallet;

/// WASM entry point: sets up logging and mounts the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use app::App;

    console_error_panic_hook::set_once();

    let loaded = config::AppConfig::from_build_env();
    let level = loaded.as_ref().map_or(log::Level::Debug, |c| c.log_level);
    let _ = console_log::init_with_level(level);
    let config = loaded.unwrap_or_else(|e| {
        log::warn!("ignoring build configuration: {e}");
        config::AppConfig::default()
    });

    leptos::mount::mount_to_body(move || leptos::view! { <App config=config/> });
}
