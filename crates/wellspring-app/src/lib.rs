//! Wellspring app — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the platform adapters and hands a ready session driver
//! to whatever UI layer sits on top.

mod driver;

pub use driver::SessionDriver;

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wellspring_platform::coach::FlowCoach;
use wellspring_platform::storage::open_storage;
use wellspring_types::config::AppConfig;

/// Assemble a driver with the default browser adapters.
pub async fn bootstrap(config: AppConfig) -> SessionDriver {
    let storage = open_storage(&config.storage).await;
    let coach = Rc::new(FlowCoach::new(config.coach.clone()));
    SessionDriver::new(config, storage, coach)
}

/// WASM entry point — sets up logging before the UI takes over.
#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Wellspring starting...");
}
