//! 凯晗书画作品集 Web (Leptos + WASM)

mod app;
mod api;
mod components;
mod logging;
mod storage;
mod surface;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(app::App);
}
