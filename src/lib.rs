// lib.rs - Root module for the business_directory library
//
// The library is shared by the SSR server binary and the WASM bundle used
// for hydration. Model, fixtures and config have no Leptos dependency and
// compile with default features.

/// Server configuration read from the environment
pub mod config;

/// Static sample data rendered by the directory
pub mod fixtures;

/// Leptos application: model, components, pages, server functions
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrate the server-rendered page
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
