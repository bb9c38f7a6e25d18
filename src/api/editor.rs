//! Chord editor API
//!
//! Insertion helpers for the chart textarea plus the quick-insert
//! vocabularies. The cursor is the textarea's `selectionStart`.

use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::text;
use crate::wasm_log;

/// Insert a chord at the cursor; returns `{ text, cursor }`
#[wasm_bindgen(js_name = insertChord)]
pub fn insert_chord(value: &str, cursor: usize, chord: &str) -> Result<JsValue, JsValue> {
    wasm_log!("insertChord: '{}' at {}", chord, cursor);
    let result = text::insert_chord(value, cursor, chord);
    serialize(&result, "Failed to serialize edit result")
}

/// Insert a `[Section]` header at the cursor; returns `{ text, cursor }`
#[wasm_bindgen(js_name = insertSection)]
pub fn insert_section(value: &str, cursor: usize, label: &str) -> Result<JsValue, JsValue> {
    wasm_log!("insertSection: '{}' at {}", label, cursor);
    let result = text::insert_section(value, cursor, label);
    serialize(&result, "Failed to serialize edit result")
}

#[wasm_bindgen(js_name = getCommonChords)]
pub fn get_common_chords() -> js_sys::Array {
    text::COMMON_CHORDS.iter().map(|c| JsValue::from_str(c)).collect()
}

#[wasm_bindgen(js_name = getSectionLabels)]
pub fn get_section_labels() -> js_sys::Array {
    text::SECTION_LABELS.iter().map(|s| JsValue::from_str(s)).collect()
}

#[wasm_bindgen(js_name = getExampleChart)]
pub fn get_example_chart() -> String {
    text::EXAMPLE_CHART.to_string()
}
