//! Note-level value types for RTTTL melodies
//!
//! A note is a pitch (or rest), a duration expressed as the denominator of a
//! whole note, an optional dot, and an octave in the 4-7 range.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Lowest octave a note may carry
pub const MIN_OCTAVE: u8 = 4;

/// Highest octave a note may carry
pub const MAX_OCTAVE: u8 = 7;

/// Check an octave number against the accepted range
pub fn is_valid_octave(octave: u8) -> bool {
    (MIN_OCTAVE..=MAX_OCTAVE).contains(&octave)
}

/// Pitch of a note, `P` being a rest
///
/// Serialized in its canonical letter form ("C", "C#", ..., "P").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pitch {
    #[serde(rename = "P")]
    Rest,
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl Pitch {
    /// Parse a pitch name, case-insensitively
    ///
    /// Examples:
    ///   "c" → C
    ///   "F#" → Fs
    ///   "p" → Rest
    ///   "e#" → None (no such RTTTL pitch)
    pub fn from_name(name: &str) -> Option<Pitch> {
        match name.to_ascii_uppercase().as_str() {
            "P" => Some(Pitch::Rest),
            "C" => Some(Pitch::C),
            "C#" => Some(Pitch::Cs),
            "D" => Some(Pitch::D),
            "D#" => Some(Pitch::Ds),
            "E" => Some(Pitch::E),
            "F" => Some(Pitch::F),
            "F#" => Some(Pitch::Fs),
            "G" => Some(Pitch::G),
            "G#" => Some(Pitch::Gs),
            "A" => Some(Pitch::A),
            "A#" => Some(Pitch::As),
            "B" => Some(Pitch::B),
            _ => None,
        }
    }

    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        match self {
            Pitch::Rest => "P",
            Pitch::C => "C",
            Pitch::Cs => "C#",
            Pitch::D => "D",
            Pitch::Ds => "D#",
            Pitch::E => "E",
            Pitch::F => "F",
            Pitch::Fs => "F#",
            Pitch::G => "G",
            Pitch::Gs => "G#",
            Pitch::A => "A",
            Pitch::As => "A#",
            Pitch::B => "B",
        }
    }

    /// Semitone offset above C, or `None` for a rest
    pub fn semitone(self) -> Option<u8> {
        match self {
            Pitch::Rest => None,
            Pitch::C => Some(0),
            Pitch::Cs => Some(1),
            Pitch::D => Some(2),
            Pitch::Ds => Some(3),
            Pitch::E => Some(4),
            Pitch::F => Some(5),
            Pitch::Fs => Some(6),
            Pitch::G => Some(7),
            Pitch::Gs => Some(8),
            Pitch::A => Some(9),
            Pitch::As => Some(10),
            Pitch::B => Some(11),
        }
    }

    pub fn is_rest(self) -> bool {
        self == Pitch::Rest
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Note length as the denominator of a whole note
///
/// Serialized as the bare number (1, 2, 4, 8, 16 or 32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Duration {
    Whole = 1,
    Half = 2,
    Quarter = 4,
    Eighth = 8,
    Sixteenth = 16,
    ThirtySecond = 32,
}

impl Duration {
    /// Map a denominator onto a duration, rejecting anything outside the enum
    pub fn from_denominator(value: u32) -> Option<Duration> {
        match value {
            1 => Some(Duration::Whole),
            2 => Some(Duration::Half),
            4 => Some(Duration::Quarter),
            8 => Some(Duration::Eighth),
            16 => Some(Duration::Sixteenth),
            32 => Some(Duration::ThirtySecond),
            _ => None,
        }
    }

    pub fn denominator(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.denominator())
    }
}

/// A single note or rest of a melody
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub duration: Duration,
    pub pitch: Pitch,
    /// Extends the time value by half
    pub dotted: bool,
    pub octave: u8,
}

impl Note {
    pub fn is_rest(&self) -> bool {
        self.pitch.is_rest()
    }
}

/// Fully explicit RTTTL token: duration, lower-case pitch, dot, octave
impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.duration,
            self.pitch.name().to_ascii_lowercase(),
            if self.dotted { "." } else { "" },
            self.octave
        )
    }
}
