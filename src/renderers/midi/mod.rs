//! RTTTL-to-MIDI rendering module
//!
//! Encodes a parsed `Tune` as a format 0 Standard MIDI File and reads
//! such files back for previews.
//!
//! # Usage
//! ```rust
//! use rtttl_midi_wasm::parse::parse_rtttl;
//! use rtttl_midi_wasm::renderers::midi::{tune_to_midi, DEFAULT_PROGRAM};
//!
//! let tune = parse_rtttl("Beep:d=4,o=5,b=120:c,e,g").unwrap();
//! let bytes = tune_to_midi(&tune, DEFAULT_PROGRAM);
//! assert_eq!(&bytes[0..4], b"MThd");
//! ```

pub mod converter;
pub mod defaults;
pub mod inspect;
pub mod smf;

// Re-export main conversion function
pub use converter::{midi_key, ticks_for, tune_to_midi};
pub use defaults::{COPYRIGHT, DEFAULT_PROGRAM, DIVISION};
pub use inspect::{summarize_midi, InspectError, MidiSummary};
pub use smf::write_var_len;
