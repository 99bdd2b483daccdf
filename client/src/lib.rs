//! Browser front end for the spin wheel.
//!
//! ARCHITECTURE
//! ============
//! All wheel rules live in the `wheel` crate. This crate holds the Leptos
//! components, keeps a `WheelCore` in a context signal, and executes the
//! actions it returns (storage writes, timers, redraws).
//!
//! Browser glue is compiled only with the `csr` feature; without it the
//! crate builds natively so the pure state modules can be unit tested.

pub mod actions;
pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
