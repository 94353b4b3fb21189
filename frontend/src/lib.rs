//! Shiori browser entry point.
//!
//! Installs the panic hook and console logger, restores the theme, and
//! mounts the [`App`] on `<body>`.

use app::{App, init_chrome};
use leptos::prelude::*;
use shiori_core::Config;
use wasm_bindgen::prelude::wasm_bindgen;

/// Site configuration embedded at compile time.
const SITE_CONFIG: &str = include_str!("../../shiori.toml");

/// Parse the embedded configuration, falling back to defaults.
pub fn site_config() -> (Config, Option<shiori_core::CoreError>) {
    match Config::from_toml_str(SITE_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = site_config();
    if let Err(err) = console_log::init_with_level(config.site.log_level()) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    if let Some(err) = config_error {
        log::error!("invalid embedded site config, using defaults: {err}");
    }

    init_chrome(&config);
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
