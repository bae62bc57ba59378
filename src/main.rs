//! Packing List Frontend Entry Point

mod models;
mod error;
mod confirm;
mod config;
mod logging;
mod store;
mod view_model;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_err) = match AppConfig::embedded() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(config.level_filter());
    if let Some(err) = config_err {
        tracing::warn!("using default config: {}", err);
    }

    mount_to_body(move || view! { <App config=config /> });
}
