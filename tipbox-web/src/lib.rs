#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod clipboard;
pub mod components;
pub mod dom;
pub mod styles;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    log::info!("mounting tooltip sandbox");
    yew::Renderer::<app::Sandbox>::new().render();
}
