//! Chord symbols: a root pitch class plus an opaque quality suffix
//!
//! The quality is never interpreted. Whatever follows the root (`m`, `7`,
//! `maj7`, `sus4`, `/B`, ...) is carried verbatim and re-attached after the
//! root has been moved.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pitch_class::PitchClass;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: String,
}

impl Chord {
    pub fn new(root: PitchClass, quality: impl Into<String>) -> Self {
        Self {
            root,
            quality: quality.into(),
        }
    }

    /// Parse `<Root><Quality>` where Root is `[A-G]` with an optional `#` or `b`.
    ///
    /// Returns `None` when the text does not start with a root letter or the
    /// spelled root has no pitch class (`Cb`, `E#`, ...).
    pub fn parse(symbol: &str) -> Option<Self> {
        let (root, quality) = split_root(symbol)?;
        let root = PitchClass::resolve(root)?;
        Some(Self::new(root, quality))
    }

    pub fn transposed(&self, semitones: i32) -> Self {
        Self::new(self.root.transpose(semitones), self.quality.clone())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)
    }
}

/// Split a symbol into its spelled root and the remaining suffix.
///
/// The accidental is taken greedily, so `"Bb"` is B-flat with an empty
/// quality rather than B with quality `"b"`.
pub fn split_root(symbol: &str) -> Option<(&str, &str)> {
    let mut chars = symbol.char_indices();
    let (_, letter) = chars.next()?;
    if !('A'..='G').contains(&letter) {
        return None;
    }

    let root_len = match chars.next() {
        Some((_, '#')) | Some((_, 'b')) => 2,
        _ => 1,
    };
    Some(symbol.split_at(root_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_quality() {
        assert_eq!(Chord::parse("C"), Some(Chord::new(PitchClass::C, "")));
        assert_eq!(Chord::parse("Am7"), Some(Chord::new(PitchClass::A, "m7")));
        assert_eq!(Chord::parse("F#sus4"), Some(Chord::new(PitchClass::Fs, "sus4")));
    }

    #[test]
    fn test_parse_flat_root_is_greedy() {
        assert_eq!(Chord::parse("Bb"), Some(Chord::new(PitchClass::As, "")));
        assert_eq!(Chord::parse("Ebmaj7"), Some(Chord::new(PitchClass::Ds, "maj7")));
    }

    #[test]
    fn test_parse_keeps_slash_bass_in_quality() {
        let chord = Chord::parse("G/B").unwrap();
        assert_eq!(chord.root, PitchClass::G);
        assert_eq!(chord.quality, "/B");
    }

    #[test]
    fn test_parse_rejects_unknown_roots() {
        assert_eq!(Chord::parse("H7"), None);
        assert_eq!(Chord::parse("Cb"), None);
        assert_eq!(Chord::parse("am"), None);
        assert_eq!(Chord::parse(""), None);
    }

    #[test]
    fn test_display_reattaches_quality() {
        let chord = Chord::parse("Dm7b5").unwrap().transposed(2);
        assert_eq!(chord.to_string(), "Em7b5");
    }
}
