use wasm_bindgen::prelude::*;

pub mod binding;
pub mod components;
pub mod config;
pub mod controller;
pub mod hooks;
pub mod models;
pub mod services;

pub use binding::{ThemeBinding, install_on_load};
pub use controller::{ThemeController, resolve_initial_theme};
pub use models::{Theme, ThemeError};

/// Entry point for pages that load the module as a plain script.
#[wasm_bindgen(js_name = installThemeController)]
pub fn install_theme_controller() -> Result<(), JsValue> {
    install_on_load().map_err(|e| JsValue::from_str(&e.to_string()))
}
