#[cfg(feature = "csr")]
pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod glyph;
pub mod loading;
pub mod sections;
pub mod selection;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
    log::info!("portfolio build {}", env!("BUILD_TIME"));
    leptos::mount::mount_to_body(App);
}
