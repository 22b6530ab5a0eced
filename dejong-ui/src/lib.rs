mod app;
mod components;
mod hooks;
pub mod rendering;

use leptos::*;
use wasm_bindgen::prelude::*;

pub use app::App;

fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Mount the default sketch variant.
#[wasm_bindgen]
pub fn hydrate() {
    init_logging();
    leptos::mount_to_body(|| view! { <App/> });
}

/// Mount a specific sketch variant by ID (falls back to the default if unknown).
#[wasm_bindgen]
pub fn mount_variant(id: String) {
    init_logging();
    leptos::mount_to_body(move || view! { <App config_id=id.clone()/> });
}
