//! Chart layout API
//!
//! Exposes chord-row detection and the chart layout records to JavaScript.
//! Records are plain objects tagged by `type`:
//! `chord-lyric-pair`, `section-header`, `spacer`, `text`.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{classifier_config, serialize};
use crate::structure::{layout_chart_with, score_chord_line};
use crate::{wasm_info, wasm_log};

/// Lay out chart text into display records
///
/// # Parameters
/// - `text`: full chart text
/// - `config_js`: optional `{ minGap, chordRatio }`; missing fields use defaults
#[wasm_bindgen(js_name = layoutChart)]
pub fn layout_chart(text: &str, config_js: JsValue) -> Result<JsValue, JsValue> {
    let config = classifier_config(config_js)?;
    let records = layout_chart_with(text, &config);

    wasm_info!(
        "layoutChart: {} lines -> {} records",
        text.split('\n').count(),
        records.len()
    );

    serialize(&records, "Failed to serialize chart layout")
}

/// Score one line against the chord-row heuristic
///
/// Returns `{ hasGap, chunks, chordChunks }`.
#[wasm_bindgen(js_name = scoreChordLine)]
pub fn score_line(line: &str, config_js: JsValue) -> Result<JsValue, JsValue> {
    let config = classifier_config(config_js)?;
    let score = score_chord_line(line, &config);

    wasm_log!(
        "scoreChordLine: {}/{} chord chunks, chord line = {}",
        score.chord_chunks,
        score.chunks,
        score.is_chord_line(&config)
    );

    serialize(&score, "Failed to serialize chord line score")
}

#[wasm_bindgen(js_name = isLikelyChordLine)]
pub fn is_likely_chord_line(line: &str) -> bool {
    crate::structure::is_likely_chord_line(line)
}
