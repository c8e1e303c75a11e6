use web_sys::console;

mod components;
pub mod config;
mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let runtime = config::init();
    if console_log::init_with_level(runtime.log_level()).is_err() {
        console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting {} frontend (wasm)", runtime.app_title());
    router::mount_app();
}
