//! Format converters
//!
//! This module contains the end-to-end RTTTL text to MIDI file pipeline.

pub mod rtttl_to_midi;

// Re-export for convenience
pub use rtttl_to_midi::{midi_file_name, rtttl_to_midi, ConversionSettings, ConvertError, MidiFile};
