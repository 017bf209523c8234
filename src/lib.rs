//! # consulta-ja
//!
//! Leptos + WASM client for Consulta Já, a doctor-appointment booking
//! app: a welcome/home screen with a login overlay, a patient sign-up
//! form, and an admin-only doctor registration screen behind a gated
//! bottom tab bar.
//!
//! Authentication is simulated in memory: any signed-in email becomes a
//! patient, except the fixed admin address. Nothing is persisted or
//! transmitted; accepted form submissions are logged and discarded.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
