//! Models module for RTTTL melodies
//!
//! This module contains the value types produced by the parser and
//! consumed by the MIDI encoder.

pub mod note;
pub mod tune;

// Re-export commonly used types
pub use note::{is_valid_octave, Duration, Note, Pitch, MAX_OCTAVE, MIN_OCTAVE};
pub use tune::{Defaults, Tune, DEFAULT_BPM, DEFAULT_DURATION, DEFAULT_OCTAVE};
