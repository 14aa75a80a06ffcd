mod app;
pub mod components;
pub mod hooks;
pub mod positioning;

use wasm_bindgen::prelude::*;

pub use app::App;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(ramp_widgets_core::config::LOG_LEVEL);
    leptos::mount_to_body(App);
}
