//! Chart structure
//!
//! Derives display structure (chord rows, lyric rows, headers, spacers) from
//! raw chart text. Stateless: text in, records out.
//!
//! ## Modules
//!
//! - `line_analysis`: chord-row scoring for a single line
//! - `chart`: single-pass pairing of chord rows with their lyrics

pub mod line_analysis;
pub mod chart;

// Re-exports for convenience
pub use line_analysis::{
    is_chord_symbol, is_likely_chord_line, score_chord_line, ChordLineScore, ClassifierConfig,
};
pub use chart::{chart_to_json, is_section_header, layout_chart, layout_chart_with, ChartLine};
