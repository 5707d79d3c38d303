//! # backoffice
//!
//! Leptos + WASM administrative dashboard for internal organization
//! management: users, projects, contacts, volunteers, categories, and
//! financial transactions.
//!
//! The crate is a thin presentation layer over an external REST backend.
//! Every entity screen fetches a list, renders a table, and funnels
//! create/update/delete through modal-confirmed API calls. The one
//! stateful component is the session activity monitor in [`session`],
//! which owns the signed-in profile and enforces the idle-timeout logout.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the WASM loader in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
