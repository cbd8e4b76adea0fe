//! Item Console Frontend Entry Point

mod api;
mod app;
mod batch;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod format;
mod models;
mod selection;
mod store;
mod toast;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(ApiConfig::load().log_level, console_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("[APP] starting item console");
    mount_to_body(App);
}
