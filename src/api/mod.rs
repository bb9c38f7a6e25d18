//! Chord chart WASM API
//!
//! This module provides the JavaScript-facing API for the chord chart engine.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, config parsing, error conversion and logging
//! - `chords`: Chord, line and chart transposition; key list
//! - `chart`: Chord-row scoring and chart layout records
//! - `editor`: Chord editor insertion helpers and vocabularies
//! - `song`: Song sheet preparation and key validation

pub mod helpers;
pub mod chords;
pub mod chart;
pub mod editor;
pub mod song;

pub use chords::{
    get_musical_keys, get_semitones_between_keys, transpose_chart, transpose_chord,
    transpose_chord_between_keys, transpose_chord_line,
};
pub use chart::{is_likely_chord_line, layout_chart, score_line};
pub use editor::{get_common_chords, get_example_chart, get_section_labels, insert_chord, insert_section};
pub use song::{prepare_song_sheet, validate_song_key};
