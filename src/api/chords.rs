//! Transposition API
//!
//! Thin wrappers over `crate::transposition`. None of these can fail: bad
//! chords and unknown keys come back unchanged, exactly as the core returns
//! them.

use wasm_bindgen::prelude::*;

use crate::models::musical_keys;
use crate::transposition;
use crate::wasm_log;

/// Transpose one chord symbol by a signed semitone count
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(chord: &str, semitones: i32) -> String {
    transposition::transpose_chord(chord, semitones)
}

/// Upward semitone distance between two key names, 0 if either is unknown
#[wasm_bindgen(js_name = getSemitonesBetweenKeys)]
pub fn get_semitones_between_keys(from_key: &str, to_key: &str) -> i32 {
    transposition::semitones_between_keys(from_key, to_key)
}

#[wasm_bindgen(js_name = transposeChordBetweenKeys)]
pub fn transpose_chord_between_keys(chord: &str, from_key: &str, to_key: &str) -> String {
    transposition::transpose_chord_between_keys(chord, from_key, to_key)
}

#[wasm_bindgen(js_name = transposeChordLine)]
pub fn transpose_chord_line(line: &str, from_key: &str, to_key: &str) -> String {
    transposition::transpose_chord_line(line, from_key, to_key)
}

/// Transpose a whole chart, one line at a time
#[wasm_bindgen(js_name = transposeChart)]
pub fn transpose_chart(text: &str, from_key: &str, to_key: &str) -> String {
    wasm_log!(
        "transposeChart: {} lines, {} -> {}",
        text.split('\n').count(),
        from_key,
        to_key
    );
    transposition::transpose_chart(text, from_key, to_key)
}

/// The 24 key names for key pickers: majors then minors
#[wasm_bindgen(js_name = getMusicalKeys)]
pub fn get_musical_keys() -> js_sys::Array {
    musical_keys().into_iter().map(JsValue::from).collect()
}
