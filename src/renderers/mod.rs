//! Renderers module for RTTTL melodies
//!
//! This module contains export logic for converting parsed
//! melodies into output formats.

pub mod midi;

// Re-export commonly used types
pub use midi::{tune_to_midi, MidiSummary};
