//! RTTTL to MIDI WASM Module
//!
//! Parses RTTTL ringtone text and encodes it as a Standard MIDI File.
//! Builds natively as a library and for the browser through `wasm-bindgen`.

pub mod models;
pub mod parse;
pub mod renderers;
pub mod converters;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use parse::{parse_rtttl, parse_rtttl_with, ParseError, ParseOptions};
pub use renderers::midi::tune_to_midi;
pub use converters::{rtttl_to_midi, ConversionSettings, ConvertError, MidiFile};

use wasm_bindgen::prelude::*;

// Runs once when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {}", e)));
    }

    log::info!("RTTTL to MIDI WASM module initialized");
}
