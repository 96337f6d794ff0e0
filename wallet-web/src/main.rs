//! Stellar Demo Wallet (browser)
//!
//! Freighter-connected wallet for the Stellar testnet: balance, XLM payments
//! and recent history.

use leptos::prelude::*;
use lib_core::config::{init_config, WalletConfig};
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod services;
mod state;
mod utils;

use app::App;
use utils::constants::build_time_config;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());

    let config = match WalletConfig::from_lookup(build_time_config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid build configuration, falling back to testnet defaults: {}", e);
            WalletConfig::default()
        }
    };
    log::info!(
        "Stellar Demo Wallet starting on {} ({})",
        config.network.display_name(),
        config.horizon_url
    );
    if let Err(e) = init_config(config) {
        log::error!("{}", e);
    }

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    if let Some(loading_element) = document.get_element_by_id("leptos-loading") {
        loading_element.class_list().add_1("hidden").ok();
        loading_element
            .set_attribute("style", "display: none !important;")
            .ok();
    }
}
