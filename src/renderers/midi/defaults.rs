//! Fixed values for RTTTL MIDI export
//!
//! Generated files must stay byte-identical across releases, so none of
//! these are configurable except the program.

/// Ticks per quarter note written to the header chunk
pub const DIVISION: u16 = 384;

/// Copyright meta-event text
pub const COPYRIGHT: &str = "(c)2024 Emily Johnson";

/// Note-on velocity for every sounding note
pub const NOTE_ON_VELOCITY: u8 = 100;

/// Channel volume (controller 7) set before the first note
pub const CHANNEL_VOLUME: u8 = 127;

/// All events go to the first channel
pub const CHANNEL: u8 = 0;

/// Default MIDI program (0 = Acoustic Grand Piano in General MIDI)
pub const DEFAULT_PROGRAM: u8 = 0;

/// Microseconds per minute, the numerator of the tempo meta-event
pub const MICROS_PER_MINUTE: u32 = 60_000_000;
