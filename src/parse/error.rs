//! Error types for RTTTL parsing
//!
//! Every variant carries the offending fragment of input text, and the
//! `Display` output is the message shown to end users.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed, unknown or out-of-range `key=value` pair in the control section
    #[error("Invalid control pair: {0}")]
    InvalidControlPair(String),

    /// Note token does not have the duration/pitch/dot/octave shape
    #[error("Invalid note format: {0}")]
    InvalidNoteFormat(String),

    #[error("Invalid note duration: {0}")]
    InvalidNoteDuration(String),

    #[error("Invalid note pitch: {0}")]
    InvalidNotePitch(String),

    #[error("Invalid note octave: {0}")]
    InvalidNoteOctave(String),

    /// Only raised in strict mode; the compatible parser passes these through
    #[error("Invalid section count: expected 3, found {0}")]
    InvalidSections(usize),
}

impl ParseError {
    /// The input fragment that caused the failure, if any
    pub fn fragment(&self) -> Option<&str> {
        match self {
            ParseError::InvalidControlPair(s)
            | ParseError::InvalidNoteFormat(s)
            | ParseError::InvalidNoteDuration(s)
            | ParseError::InvalidNotePitch(s)
            | ParseError::InvalidNoteOctave(s) => Some(s),
            ParseError::InvalidSections(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ParseError::InvalidControlPair("x=4".into()).to_string(),
            "Invalid control pair: x=4"
        );
        assert_eq!(
            ParseError::InvalidNoteFormat("z9".into()).to_string(),
            "Invalid note format: z9"
        );
        assert_eq!(
            ParseError::InvalidSections(2).to_string(),
            "Invalid section count: expected 3, found 2"
        );
        assert_eq!(ParseError::InvalidNoteOctave("c9".into()).fragment(), Some("c9"));
    }
}
