//! # quicky
//!
//! Leptos + WASM chat widget that floats above the MadeWithNestlé page clone.
//! The widget relays visitor questions to a remote question-answering
//! endpoint and renders the answers as formatted text.
//!
//! Pure state machines live in `state` and `controller` so they run under
//! native tests; browser adapters (`net`, `util::speech`, `util::ticker`) are
//! compiled against the DOM only with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then mounts
/// the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
