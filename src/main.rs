//! Ocean CRM Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod store;

use app::App;
use crm_core::CrmConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = rolling_logger::init(level, CrmConfig::default().log_capacity) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }

    mount_to_body(App);
}
