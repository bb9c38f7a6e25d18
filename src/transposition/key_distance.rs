//! Semitone distance between two named keys
//!
//! Distance is always the upward rotation from the first tonic to the second,
//! in [0, 11]. The minor marker is dropped before the tonics are compared, so
//! this is pitch-class distance rather than relative major/minor logic.

use crate::models::Key;

/// Number of semitones to move chords written in `from_key` into `to_key`.
///
/// Returns 0 when either key name does not resolve.
pub fn semitones_between_keys(from_key: &str, to_key: &str) -> i32 {
    match (Key::parse(from_key), Key::parse(to_key)) {
        (Some(from), Some(to)) => from.semitones_to(&to),
        _ => {
            log::debug!("unknown key in '{}' -> '{}', not transposing", from_key, to_key);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::musical_keys;

    #[test]
    fn test_known_distances() {
        assert_eq!(semitones_between_keys("C", "D"), 2);
        assert_eq!(semitones_between_keys("C", "Db"), 1);
        assert_eq!(semitones_between_keys("Am", "Cm"), 3);
        assert_eq!(semitones_between_keys("Am", "C"), 3);
    }

    #[test]
    fn test_always_upward() {
        assert_eq!(semitones_between_keys("D", "C"), 10);
        assert_eq!(semitones_between_keys("B", "C"), 1);
        assert_eq!(semitones_between_keys("C", "B"), 11);
    }

    #[test]
    fn test_same_key_is_zero() {
        for key in musical_keys() {
            assert_eq!(semitones_between_keys(&key, &key), 0, "key {}", key);
        }
        assert_eq!(semitones_between_keys("Db", "C#"), 0);
    }

    #[test]
    fn test_unknown_keys_are_zero() {
        assert_eq!(semitones_between_keys("H", "C"), 0);
        assert_eq!(semitones_between_keys("C", ""), 0);
        assert_eq!(semitones_between_keys("", ""), 0);
    }
}
