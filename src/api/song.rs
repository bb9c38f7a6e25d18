//! Song sheet API
//!
//! Used by the song page: pick the display key, transpose the chart into it,
//! and lay it out in one call.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{classifier_config, optional_string, serialize};
use crate::song::{validate_default_key, SongSheet};
use crate::wasm_info;

/// Prepare a song for display
///
/// # Parameters
/// - `chords`: chart text as stored with the song
/// - `default_key`: key the chart is written in (may be empty)
/// - `service_key`: key requested by the service, if any
/// - `config_js`: optional classifier settings
///
/// # Returns
/// `{ originalKey, currentKey, chords, lines }`
#[wasm_bindgen(js_name = prepareSongSheet)]
pub fn prepare_song_sheet(
    chords: &str,
    default_key: Option<String>,
    service_key: Option<String>,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let config = classifier_config(config_js)?;
    let default_key = optional_string(default_key);
    let service_key = optional_string(service_key);

    let sheet = SongSheet::prepare_with(
        chords,
        default_key.as_deref(),
        service_key.as_deref(),
        &config,
    );
    wasm_info!(
        "prepareSongSheet: {} -> {}, {} records",
        sheet.original_key,
        sheet.current_key,
        sheet.lines.len()
    );

    serialize(&sheet, "Failed to serialize song sheet")
}

/// Reject a song whose chord text has no default key
#[wasm_bindgen(js_name = validateSongKey)]
pub fn validate_song_key(chords: &str, default_key: Option<String>) -> Result<(), JsValue> {
    validate_default_key(chords, default_key.as_deref())?;
    Ok(())
}
