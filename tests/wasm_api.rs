//! WASM API test
//!
//! Exercises the JavaScript-facing exports. Needs a browser runner
//! (`wasm-pack test --headless --chrome`), so it only builds for wasm32.

#![cfg(target_arch = "wasm32")]

use rtttl_midi_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_parse_then_convert() {
    let parsed = parse_rtttl_js("Test:d=4,o=5,b=120:c,8d,p,4e").unwrap();
    let outcome: ParseOutcome = serde_wasm_bindgen::from_value(parsed.clone()).unwrap();
    assert!(!outcome.has_parse_error);
    assert_eq!(outcome.notes.len(), 4);

    let midi = convert_rtttl_to_midi_js(parsed, 0).unwrap().to_vec();
    assert_eq!(&midi[0..4], b"MThd");
}

#[wasm_bindgen_test]
fn test_convert_refuses_failed_parse() {
    let parsed = parse_rtttl_js("Bad:x=4:c").unwrap();
    let err = convert_rtttl_to_midi_js(parsed, 0).unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("Invalid control pair: x=4"));
}

#[wasm_bindgen_test]
fn test_one_shot_with_default_settings() {
    let midi = rtttl_to_midi_js("Beep:d=8,o=6,b=160:c,e,g", JsValue::UNDEFINED).unwrap();
    let summary = describe_midi_js(&midi.to_vec()).unwrap();
    let summary: serde_json::Value = serde_wasm_bindgen::from_value(summary).unwrap();
    assert_eq!(summary["noteCount"].as_f64(), Some(3.0));
    assert_eq!(summary["trackName"], "Beep");
}

#[wasm_bindgen_test]
fn test_one_shot_reports_parse_errors() {
    let err = rtttl_to_midi_js("Bad:d=4,o=5,b=120:c,z9", JsValue::NULL).unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("Invalid note format: z9"));
}

#[wasm_bindgen_test]
fn test_file_name() {
    assert_eq!(midi_file_name_js("Nokia"), "Nokia.mid");
}
