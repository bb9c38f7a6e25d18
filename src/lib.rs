//! Chord Chart WASM Module
//!
//! Chord transposition and chord-chart layout for the song pages of the
//! community app. Everything here is a pure text transform: chart text and
//! key names in, text and display records out.

pub mod error;
pub mod models;
pub mod transposition;
pub mod structure;
pub mod text;
pub mod song;
pub mod api;

// Re-export commonly used types
pub use error::ChartError;
pub use models::{Chord, Key, Mode, PitchClass, musical_keys};
pub use transposition::{
    semitones_between_keys, transpose_chart, transpose_chord, transpose_chord_between_keys,
    transpose_chord_line,
};
pub use structure::{layout_chart, layout_chart_with, ChartLine, ChordLineScore, ClassifierConfig};
pub use song::SongSheet;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        crate::wasm_warn!("logger already initialized");
    }

    log::info!("Chord chart WASM module initialized");
}
