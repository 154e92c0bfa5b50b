//! Note token parsing (`8c#.5`)
//!
//! A token is, in this fixed order: an optional one or two digit duration,
//! a pitch letter with an optional sharp, an optional dot and an optional
//! single digit octave.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{is_valid_octave, Defaults, Duration, Note, Pitch};

use super::ParseError;

static NOTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})?([a-gpA-GP]#?)(\.)?([0-9])?$").expect("note pattern is valid")
});

/// Parse the notes section into notes, in order
///
/// All whitespace and any BOM are removed first and empty tokens are skipped,
/// so `"c, ,d"` yields two notes. The first bad token aborts the whole section.
pub fn parse_notes(section: &str, defaults: &Defaults) -> Result<Vec<Note>, ParseError> {
    let compact: String = section.chars().filter(|c| !is_blank(*c)).collect();

    compact
        .split(',')
        .filter(|token| !token.is_empty())
        .map(|token| parse_note(token, defaults))
        .collect()
}

/// Unicode whitespace plus the byte order mark
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Parse one note token, filling gaps from the tune defaults
///
/// Validation runs duration, then pitch, then octave; the first failure wins.
pub fn parse_note(token: &str, defaults: &Defaults) -> Result<Note, ParseError> {
    let caps = NOTE_PATTERN
        .captures(token)
        .ok_or_else(|| ParseError::InvalidNoteFormat(token.to_string()))?;

    let duration = match caps.get(1) {
        Some(m) => m
            .as_str()
            .parse::<u32>()
            .ok()
            .and_then(Duration::from_denominator)
            .ok_or_else(|| ParseError::InvalidNoteDuration(token.to_string()))?,
        None => defaults.duration,
    };

    let pitch = caps
        .get(2)
        .and_then(|m| Pitch::from_name(m.as_str()))
        .ok_or_else(|| ParseError::InvalidNotePitch(token.to_string()))?;

    let dotted = caps.get(3).is_some();

    let octave = match caps.get(4) {
        Some(m) => m
            .as_str()
            .parse::<u8>()
            .ok()
            .filter(|o| is_valid_octave(*o))
            .ok_or_else(|| ParseError::InvalidNoteOctave(token.to_string()))?,
        None => defaults.octave,
    };

    Ok(Note {
        duration,
        pitch,
        dotted,
        octave,
    })
}
