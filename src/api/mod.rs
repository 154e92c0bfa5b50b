//! RTTTL to MIDI WASM API
//!
//! This module provides the JavaScript-facing API for the ringtone
//! converter, plus the shared utilities for serialization, error handling
//! and console logging.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `types`: Flat parse result shape exchanged with JavaScript
//! - `convert`: Exported parse/encode/inspect functions

pub mod helpers;
pub mod types;
pub mod convert;

pub use convert::{
    convert_rtttl_to_midi_js, describe_midi_js, midi_file_name_js, parse_rtttl_js, rtttl_to_midi_js,
};
pub use types::ParseOutcome;
