//! The twelve pitch classes of equal temperament
//!
//! Canonical spelling is sharp-based: C C# D D# E F F# G G# A A# B.
//! The five flat spellings (Db, Eb, Gb, Ab, Bb) are aliases that resolve to
//! the sharp variant. Any other spelling (Cb, E#, Fb, B#, H, ...) does not
//! resolve; callers treat that as "leave the text alone".

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

/// All pitch classes in chromatic order, index == semitones above C
pub const CHROMATIC: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::Cs,
    PitchClass::D,
    PitchClass::Ds,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Fs,
    PitchClass::G,
    PitchClass::Gs,
    PitchClass::A,
    PitchClass::As,
    PitchClass::B,
];

/// Canonical names, parallel to `CHROMATIC`
pub const CANONICAL_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings and the sharp spelling they stand for
pub const NOTE_ALIASES: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

impl PitchClass {
    /// Semitones above C (0-11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Build from any integer, wrapping around the octave
    pub fn from_index(index: i32) -> Self {
        CHROMATIC[index.rem_euclid(12) as usize]
    }

    /// Canonical (sharp-based) name
    pub fn as_str(self) -> &'static str {
        CANONICAL_NAMES[self.index() as usize]
    }

    /// Resolve a root spelling to a pitch class.
    ///
    /// Flat aliases are normalized first, then looked up in the canonical
    /// table. Matching is case-sensitive: `"c"` and `"bb"` do not resolve.
    pub fn resolve(root: &str) -> Option<Self> {
        let normalized = normalize_alias(root);
        CANONICAL_NAMES
            .iter()
            .position(|name| *name == normalized)
            .map(|i| CHROMATIC[i])
    }

    /// Shift by a signed number of semitones
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_index(self.index() as i32 + semitones.rem_euclid(12))
    }

    /// Upward distance to `other` in semitones, always in [0, 11]
    pub fn semitones_up_to(self, other: PitchClass) -> i32 {
        (other.index() as i32 - self.index() as i32 + 12) % 12
    }
}

/// Map a flat spelling to its sharp equivalent, pass anything else through
pub fn normalize_alias(root: &str) -> &str {
    NOTE_ALIASES
        .iter()
        .find(|(flat, _)| *flat == root)
        .map(|(_, sharp)| *sharp)
        .unwrap_or(root)
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
