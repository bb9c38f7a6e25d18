//! Musical keys: a tonic pitch class and a major/minor mode
//!
//! The mode is informational only. Key distance is measured tonic to tonic,
//! so `Am` -> `C` is the same 3 semitones as `A` -> `C`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pitch_class::{PitchClass, CANONICAL_NAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub tonic: PitchClass,
    pub mode: Mode,
}

impl Key {
    pub fn new(tonic: PitchClass, mode: Mode) -> Self {
        Self { tonic, mode }
    }

    /// Parse a key name such as `"D"`, `"Bb"` or `"F#m"`.
    ///
    /// A single trailing `m` marks a minor key and is removed before the tonic
    /// is resolved through the alias table.
    pub fn parse(name: &str) -> Option<Self> {
        let (root, mode) = match name.strip_suffix('m') {
            Some(root) => (root, Mode::Minor),
            None => (name, Mode::Major),
        };
        PitchClass::resolve(root).map(|tonic| Self::new(tonic, mode))
    }

    /// Upward semitone distance from this key's tonic to `other`'s tonic
    pub fn semitones_to(&self, other: &Key) -> i32 {
        self.tonic.semitones_up_to(other.tonic)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            Mode::Major => write!(f, "{}", self.tonic),
            Mode::Minor => write!(f, "{}m", self.tonic),
        }
    }
}

/// The 24 selectable key names: 12 majors then 12 minors, in chromatic order
pub fn musical_keys() -> Vec<String> {
    let majors = CANONICAL_NAMES.iter().map(|name| name.to_string());
    let minors = CANONICAL_NAMES.iter().map(|name| format!("{}m", name));
    majors.chain(minors).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_major_and_minor() {
        assert_eq!(Key::parse("D"), Some(Key::new(PitchClass::D, Mode::Major)));
        assert_eq!(Key::parse("F#m"), Some(Key::new(PitchClass::Fs, Mode::Minor)));
        assert_eq!(Key::parse("Bbm"), Some(Key::new(PitchClass::As, Mode::Minor)));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Key::parse(""), None);
        assert_eq!(Key::parse("m"), None);
        assert_eq!(Key::parse("Hm"), None);
        assert_eq!(Key::parse("Cmm"), None);
    }

    #[test]
    fn test_minor_marker_does_not_change_distance() {
        let a_minor = Key::parse("Am").unwrap();
        let a_major = Key::parse("A").unwrap();
        let c = Key::parse("C").unwrap();
        assert_eq!(a_minor.semitones_to(&c), a_major.semitones_to(&c));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::parse("Ebm").unwrap().to_string(), "D#m");
        assert_eq!(Key::parse("G").unwrap().to_string(), "G");
    }

    #[test]
    fn test_musical_keys_order() {
        let keys = musical_keys();
        assert_eq!(keys.len(), 24);
        assert_eq!(keys[0], "C");
        assert_eq!(keys[11], "B");
        assert_eq!(keys[12], "Cm");
        assert_eq!(keys[23], "Bm");
        for i in 0..12 {
            assert_eq!(keys[i + 12], format!("{}m", keys[i]));
        }
    }
}
