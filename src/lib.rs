//! Score Theory WASM Module
//!
//! Key signatures, diatonic seventh chords and MusicXML score summaries,
//! usable natively (`rlib`, `theory` binary) and from JavaScript (`cdylib`).

pub mod api;
pub mod config;
pub mod converters;
pub mod models;
pub mod report;
pub mod theory;

// Re-export commonly used types
pub use models::*;
pub use theory::{generate_diatonic_chords, resolve_key_signature, TheoryError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // a logger may already be installed by the host page
    #[cfg(feature = "console_log")]
    {
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            log::debug!("console_log not installed: {}", err);
        }
    }

    log::info!("Score theory WASM module initialized");
}

