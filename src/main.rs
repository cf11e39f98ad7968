//! Lost & Found Frontend Entry Point

mod api;
mod app;
mod category;
mod components;
mod config;
mod context;
mod dialog;
mod error;
mod gateway;
mod generation;
mod logger;
mod models;
mod router;
mod signup;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    logger::init(config.log_level);
    log::info!("api origin {}", config.api_origin);
    mount_to_body(move || view! { <App config=config /> });
}
