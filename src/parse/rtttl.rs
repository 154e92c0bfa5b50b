//! RTTTL entry point: `name:controls:notes`

use crate::models::Tune;

use super::controls::parse_controls;
use super::notes::parse_notes;
use super::ParseError;

/// Parser behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject input that does not have exactly three sections, and `b=0`.
    /// Off by default, which keeps output identical to existing ringtone
    /// catalogs that rely on the lenient behaviour.
    pub strict: bool,
}

/// Parse RTTTL text with default (lenient) options
pub fn parse_rtttl(text: &str) -> Result<Tune, ParseError> {
    parse_rtttl_with(text, ParseOptions::default())
}

/// Parse RTTTL text into a `Tune`
///
/// Line breaks are removed before anything else. When the text does not
/// split into exactly three `:` separated sections the lenient parser
/// returns an empty tune with default controls and no error.
pub fn parse_rtttl_with(text: &str, options: ParseOptions) -> Result<Tune, ParseError> {
    let text: String = text.chars().filter(|c| *c != '\r' && *c != '\n').collect();

    let sections: Vec<&str> = text.split(':').collect();
    let [name, controls, notes] = sections.as_slice() else {
        if options.strict {
            return Err(ParseError::InvalidSections(sections.len()));
        }
        log::warn!(
            "RTTTL text has {} sections instead of 3, returning an empty tune",
            sections.len()
        );
        return Ok(Tune::default());
    };

    let defaults = parse_controls(controls, options.strict)?;
    let notes = parse_notes(notes, &defaults)?;

    log::debug!("parsed RTTTL {:?}: {} notes", name, notes.len());

    Ok(Tune {
        name: name.to_string(),
        defaults,
        notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Duration, Pitch};

    #[test]
    fn test_parse_simple_tune() {
        let tune = parse_rtttl("Test:d=4,o=5,b=120:c,8d,p,4e").unwrap();
        assert_eq!(tune.name, "Test");
        assert_eq!(tune.defaults.bpm, 120);
        assert_eq!(tune.notes.len(), 4);
        assert_eq!(tune.sounding_notes().count(), 3);
        assert_eq!(tune.rest_count(), 1);
        assert_eq!(tune.notes[1].duration, Duration::Eighth);
        assert_eq!(tune.notes[2].pitch, Pitch::Rest);
    }

    #[test]
    fn test_line_breaks_are_removed() {
        let tune = parse_rtttl("Te\r\nst:d=4,o=5,b=120:c,\n8d,\r4e").unwrap();
        assert_eq!(tune.name, "Test");
        assert_eq!(tune.notes.len(), 3);
    }

    #[test]
    fn test_empty_name_allowed() {
        let tune = parse_rtttl(":d=4,o=5,b=120:c").unwrap();
        assert_eq!(tune.name, "");
        assert_eq!(tune.notes.len(), 1);
    }

    #[test]
    fn test_wrong_section_count_passes_through() {
        for text in ["", "just a name", "a:b", "a:b:c:d"] {
            assert_eq!(parse_rtttl(text), Ok(Tune::default()), "text {text:?}");
        }
    }

    #[test]
    fn test_wrong_section_count_strict() {
        let strict = ParseOptions { strict: true };
        assert_eq!(parse_rtttl_with("a:b", strict), Err(ParseError::InvalidSections(2)));
        assert_eq!(parse_rtttl_with("a:b:c:d", strict), Err(ParseError::InvalidSections(4)));
    }

    #[test]
    fn test_bad_controls_abort() {
        assert_eq!(
            parse_rtttl("Bad:x=4:c"),
            Err(ParseError::InvalidControlPair("x=4".to_string()))
        );
    }

    #[test]
    fn test_bad_note_aborts() {
        let err = parse_rtttl("Bad:d=4,o=5,b=120:c,z9").unwrap_err();
        assert!(err.to_string().starts_with("Invalid note format: z9"));
    }

    #[test]
    fn test_deterministic() {
        let text = "Toccata:d=32,o=5,b=100:a#.,g#.,2a#,g#,f#,f,d#.,4d.,2d#";
        assert_eq!(parse_rtttl(text), parse_rtttl(text));
    }

    #[test]
    fn test_display_reparses_to_same_tune() {
        let tune = parse_rtttl("Mix:d=8,o=6,b=90:c,4d#.5,p,32b7").unwrap();
        assert_eq!(parse_rtttl(&tune.to_string()), Ok(tune));
    }
}
