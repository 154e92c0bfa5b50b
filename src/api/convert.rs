//! RTTTL conversion exports
//!
//! `parseRtttl` and `convertRtttlToMidi` mirror the two-step server contract
//! (inspect the parse result, then encode); `rtttlToMidi` does both at once
//! and throws the parse message on bad input.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, serialize, to_uint8_array, validation_error};
use super::types::ParseOutcome;
use crate::converters::{midi_file_name, rtttl_to_midi, ConversionSettings};
use crate::parse::parse_rtttl;
use crate::renderers::midi::{summarize_midi, tune_to_midi};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Parse RTTTL text
///
/// # Returns
/// `{ name, defaults, notes, hasParseError, parseErrorMessage }`
#[wasm_bindgen(js_name = parseRtttl)]
pub fn parse_rtttl_js(text: &str) -> Result<JsValue, JsValue> {
    wasm_log!("parseRtttl called with {} chars", text.len());

    let result = parse_rtttl(text);
    match &result {
        Ok(tune) => wasm_log!("  Parsed {:?}: {} notes", tune.name, tune.notes.len()),
        Err(err) => wasm_warn!(
            "parseRtttl: {} (at {:?})",
            err,
            err.fragment().unwrap_or_default()
        ),
    }
    let outcome = ParseOutcome::from(result);

    serialize(&outcome, "Failed to serialize parse result")
}

/// Encode a result previously returned by `parseRtttl`
///
/// # Parameters
/// - `parsed`: object returned by `parseRtttl`
/// - `program`: General MIDI program number
///
/// # Returns
/// MIDI file as Uint8Array (Standard MIDI File Format 0); throws the parse
/// message if `parsed.hasParseError` is set
#[wasm_bindgen(js_name = convertRtttlToMidi)]
pub fn convert_rtttl_to_midi_js(parsed: JsValue, program: u8) -> Result<js_sys::Uint8Array, JsValue> {
    let outcome: ParseOutcome = deserialize(parsed, "Invalid parse result")?;
    let tune = outcome.into_tune().map_err(validation_error)?;

    let bytes = tune_to_midi(&tune, program);
    wasm_info!("convertRtttlToMidi: {:?} -> {} bytes", tune.name, bytes.len());

    Ok(to_uint8_array(&bytes))
}

/// Parse and encode in one call
///
/// # Parameters
/// - `text`: RTTTL text
/// - `settings`: optional `{ program, strict }`
#[wasm_bindgen(js_name = rtttlToMidi)]
pub fn rtttl_to_midi_js(text: &str, settings: JsValue) -> Result<js_sys::Uint8Array, JsValue> {
    let settings: ConversionSettings = deserialize_or_default(settings, "Invalid conversion settings")?;
    wasm_log!("rtttlToMidi called with {:?}", settings);

    let file = rtttl_to_midi(text, &settings).map_err(|e| validation_error(e.to_string()))?;

    wasm_info!("rtttlToMidi: {} ({} bytes)", file.file_name, file.bytes.len());
    Ok(to_uint8_array(&file.bytes))
}

/// Download file name for a tune title
#[wasm_bindgen(js_name = midiFileName)]
pub fn midi_file_name_js(name: &str) -> String {
    midi_file_name(name)
}

/// Summarize MIDI bytes for the preview player
///
/// # Returns
/// `{ format, trackCount, ticksPerQuarter, trackName, copyright, tempoMicros, program, noteCount, totalTicks }`
#[wasm_bindgen(js_name = describeMidi)]
pub fn describe_midi_js(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let summary = summarize_midi(bytes).map_err(|e| validation_error(e.to_string()))?;
    serialize(&summary, "Failed to serialize MIDI summary")
}
