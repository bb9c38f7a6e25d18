//! Text editing helpers for the chord editor
//!
//! Pure text operations with no knowledge of chords or keys.

pub mod editing;

// Re-exports for convenience
pub use editing::{
    insert_at, insert_chord, insert_section, EditResult, COMMON_CHORDS, EXAMPLE_CHART,
    SECTION_LABELS,
};
