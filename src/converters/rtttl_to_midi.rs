//! RTTTL text to downloadable MIDI file
//!
//! The single entry point for callers that hold RTTTL text (a request body,
//! a stored catalog entry) and want MIDI bytes plus a file name to serve.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Tune;
use crate::parse::{parse_rtttl_with, ParseError, ParseOptions};
use crate::renderers::midi::{tune_to_midi, DEFAULT_PROGRAM};

/// Configuration options for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// General MIDI program for the single channel
    pub program: u8,

    /// Use the strict parser (see `ParseOptions::strict`)
    pub strict: bool,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM,
            strict: false,
        }
    }
}

impl ConversionSettings {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict: self.strict,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The caller's text was rejected; report it as a client error
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// An encoded tune ready to be served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl MidiFile {
    pub const MIME_TYPE: &'static str = "audio/midi";

    /// Encode a parsed tune
    pub fn from_tune(tune: &Tune, program: u8) -> Self {
        Self {
            file_name: midi_file_name(&tune.name),
            bytes: tune_to_midi(tune, program),
        }
    }
}

/// Download name for a tune: its title with a `.mid` extension
pub fn midi_file_name(name: &str) -> String {
    format!("{}.mid", name)
}

/// Parse and encode in one step
pub fn rtttl_to_midi(text: &str, settings: &ConversionSettings) -> Result<MidiFile, ConvertError> {
    let tune = parse_rtttl_with(text, settings.parse_options())?;
    let file = MidiFile::from_tune(&tune, settings.program);
    log::info!("converted {:?} to {} MIDI bytes", file.file_name, file.bytes.len());
    Ok(file)
}
