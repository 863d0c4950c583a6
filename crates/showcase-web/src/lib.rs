//! Showcase Web - WebGPU-powered landing page and framework gallery
//!
//! This crate provides the browser entry point: the Bevy app, the URL hash
//! bridge and the egui overlays.

mod app;
mod probe;
mod router;
mod ui;

use wasm_bindgen::prelude::*;

/// Entry point for WASM module
#[wasm_bindgen(start)]
pub fn main() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging with filtering to reduce wgpu noise
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO)
            .build()
    );

    if let Err(e) = app::run() {
        tracing::error!("Showcase failed to start: {:#}", e);
    }
}
