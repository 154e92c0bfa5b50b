//! Control section parsing (`d=4,o=5,b=120`)

use crate::models::{is_valid_octave, Defaults, Duration};

use super::ParseError;

/// Parse the comma separated control pairs, overriding the built-in defaults
///
/// Keys are case-insensitive but taken verbatim otherwise, so `" o=5"` is an
/// unknown key. Values may carry surrounding spaces. The first bad pair
/// aborts with `ParseError::InvalidControlPair` carrying the pair text as
/// written.
pub fn parse_controls(section: &str, strict: bool) -> Result<Defaults, ParseError> {
    let mut defaults = Defaults::default();

    for pair in section.split(',') {
        let invalid = || ParseError::InvalidControlPair(pair.to_string());

        let mut parts = pair.split('=');
        let key = parts.next().unwrap_or_default().to_ascii_lowercase();
        let value = parts.next().ok_or_else(invalid)?.trim();

        match key.as_str() {
            "o" => {
                let octave: u8 = value.parse().map_err(|_| invalid())?;
                if !is_valid_octave(octave) {
                    return Err(invalid());
                }
                defaults.octave = octave;
            }
            "d" => {
                defaults.duration = value
                    .parse::<u32>()
                    .ok()
                    .and_then(Duration::from_denominator)
                    .ok_or_else(invalid)?;
            }
            "b" => {
                let bpm: u32 = value.parse().map_err(|_| invalid())?;
                if strict && bpm == 0 {
                    return Err(invalid());
                }
                defaults.bpm = bpm;
            }
            _ => return Err(invalid()),
        }
    }

    log::debug!("control section {:?} -> {:?}", section, defaults);
    Ok(defaults)
}
