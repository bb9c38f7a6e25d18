//! Chord transposition over symbols, lines and whole charts
//!
//! Everything here is fail-soft: a token that does not parse as a chord, or a
//! key name that does not resolve, leaves the text exactly as it was.
//!
//! Example:
//!   transpose_chord("Am7", 3)                      → "Cm7"
//!   transpose_chord_line("C    G/B", "C", "D")      → "D    A/B"

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::models::Chord;
use super::key_distance::semitones_between_keys;

lazy_static! {
    /// A chord token inside free text: root, optional quality from a fixed
    /// vocabulary, optional slash bass. The token must start on a word
    /// boundary and be followed by end of line or a non-word, non-`#` char,
    /// which is captured as `tail` so it can be written back untouched.
    static ref CHORD_TOKEN: Regex = Regex::new(
        r"\b(?P<chord>[A-G][#b]?(?:m|maj|min|aug|dim|sus|add|maj7|m7|7|9|11|13|6|5)?(?:/[A-G][#b]?)?)(?P<tail>[^\w#]|$)"
    ).expect("chord token pattern is valid");
}

/// Transpose a single chord symbol by a signed number of semitones.
///
/// Shifts that are a whole number of octaves return the symbol unchanged, as
/// does anything that is not a recognizable chord (`"H7"`, `"N.C."`, `""`).
/// The transposed root is always spelled with sharps.
pub fn transpose_chord(chord: &str, semitones: i32) -> String {
    if chord.is_empty() || semitones.rem_euclid(12) == 0 {
        return chord.to_string();
    }

    match Chord::parse(chord) {
        Some(parsed) => parsed.transposed(semitones).to_string(),
        None => {
            log::trace!("leaving unrecognized chord '{}' as is", chord);
            chord.to_string()
        }
    }
}

/// Transpose a chord symbol from one key to another
pub fn transpose_chord_between_keys(chord: &str, from_key: &str, to_key: &str) -> String {
    transpose_chord(chord, semitones_between_keys(from_key, to_key))
}

/// Transpose every chord token in a line of text.
///
/// Whitespace, lyrics and punctuation between tokens are copied through
/// byte for byte, so column alignment with the lyric line below survives.
/// Equal key names short-circuit without scanning.
pub fn transpose_chord_line(line: &str, from_key: &str, to_key: &str) -> String {
    if line.is_empty() || from_key.is_empty() || to_key.is_empty() || from_key == to_key {
        return line.to_string();
    }

    let semitones = semitones_between_keys(from_key, to_key);
    if semitones == 0 {
        return line.to_string();
    }

    CHORD_TOKEN
        .replace_all(line, |caps: &Captures| {
            format!("{}{}", transpose_chord(&caps["chord"], semitones), &caps["tail"])
        })
        .into_owned()
}

/// Transpose a whole chart line by line, keeping the line structure intact
pub fn transpose_chart(text: &str, from_key: &str, to_key: &str) -> String {
    if text.is_empty() || from_key == to_key {
        return text.to_string();
    }

    log::debug!("transposing chart from {} to {}", from_key, to_key);
    text.split('\n')
        .map(|line| transpose_chord_line(line, from_key, to_key))
        .collect::<Vec<_>>()
        .join("\n")
}
