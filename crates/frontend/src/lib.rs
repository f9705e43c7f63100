pub mod app;
pub mod domain;
pub mod shared;

use contracts::domain::a001_order::{sample_orders, validate_orders};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    match validate_orders(sample_orders()) {
        Ok(()) => log::info!("orders: {} records loaded", sample_orders().len()),
        Err(e) => log::error!("orders: invalid record store: {}", e),
    }

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
