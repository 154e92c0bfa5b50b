//! Parsed RTTTL melody
//!
//! A `Tune` is produced fresh by every successful parse and is never mutated
//! afterwards; the MIDI encoder only borrows it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::{Duration, Note};

/// Fallback duration when the control section omits `d=`
pub const DEFAULT_DURATION: Duration = Duration::Quarter;

/// Fallback octave when the control section omits `o=`
pub const DEFAULT_OCTAVE: u8 = 6;

/// Fallback tempo when the control section omits `b=`
pub const DEFAULT_BPM: u32 = 63;

/// Values applied to notes that leave duration or octave out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub duration: Duration,
    pub octave: u8,
    /// Beats per minute; not range checked
    pub bpm: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            octave: DEFAULT_OCTAVE,
            bpm: DEFAULT_BPM,
        }
    }
}

/// A melody: title, control defaults and notes in playback order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tune {
    pub name: String,
    pub defaults: Defaults,
    pub notes: Vec<Note>,
}

impl Tune {
    /// Notes that produce sound, skipping rests
    pub fn sounding_notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(|n| !n.is_rest())
    }

    pub fn rest_count(&self) -> usize {
        self.notes.iter().filter(|n| n.is_rest()).count()
    }
}

/// Canonical RTTTL text with every note fully spelled out
impl fmt::Display for Tune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:d={},o={},b={}:",
            self.name, self.defaults.duration, self.defaults.octave, self.defaults.bpm
        )?;
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pitch;

    #[test]
    fn test_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults.duration, Duration::Quarter);
        assert_eq!(defaults.octave, 6);
        assert_eq!(defaults.bpm, 63);
    }

    #[test]
    fn test_tune_display() {
        let tune = Tune {
            name: "Beep".to_string(),
            defaults: Defaults::default(),
            notes: vec![
                Note { duration: Duration::Quarter, pitch: Pitch::C, dotted: false, octave: 6 },
                Note { duration: Duration::Eighth, pitch: Pitch::Rest, dotted: false, octave: 6 },
            ],
        };
        assert_eq!(tune.to_string(), "Beep:d=4,o=6,b=63:4c6,8p6");
        assert_eq!(tune.sounding_notes().count(), 1);
        assert_eq!(tune.rest_count(), 1);
    }
}
