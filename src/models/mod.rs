//! Models module for the chord chart engine
//!
//! Pitch classes, chord symbols and keys. All of these are transient values
//! built for the length of a single transpose or layout call.

pub mod pitch_class;
pub mod chord;
pub mod key;

// Re-export commonly used types
pub use pitch_class::{PitchClass, CANONICAL_NAMES, NOTE_ALIASES};
pub use chord::Chord;
pub use key::{Key, Mode, musical_keys};
