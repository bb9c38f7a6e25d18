//! Line analysis: is this line of a chart a row of chord symbols?
//!
//! Chord rows are recognized by shape rather than grammar:
//! - symbols are column-aligned, so the line has at least one gap of two or
//!   more whitespace characters
//! - splitting on those gaps leaves chunks, and enough of them (half, by
//!   default) look like chord symbols
//!
//! Short sparse lines of capitalized words can pass this test. That is a known
//! limit of the heuristic; `ChordLineScore` exposes the counts so callers and
//! tests can see exactly why a line was accepted.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

lazy_static! {
    /// Start of a chunk that reads as a chord: root, then any run of quality
    /// marks. Only the prefix is checked, so extensions the run does not list
    /// (`m7b5`, `7#9`, `(add11)`) still count.
    static ref CHORD_CHUNK: Regex = Regex::new(
        r"^[A-G][#b]?(?:maj|min|aug|dim|sus|add|m|11|13|2|4|5|6|7|9|-|\+|/)*"
    ).expect("chord chunk pattern is valid");
}

/// Tunables for chord line detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Minimum run of whitespace that separates two chord columns
    pub min_gap: usize,

    /// Fraction of chunks that must look like chords
    pub chord_ratio: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_gap: 2,
            chord_ratio: 0.5,
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_gap == 0 {
            return Err(ChartError::InvalidConfig("minGap must be at least 1".to_string()));
        }
        if !(self.chord_ratio > 0.0 && self.chord_ratio <= 1.0) {
            return Err(ChartError::InvalidConfig(format!(
                "chordRatio {} must be in (0, 1]",
                self.chord_ratio
            )));
        }
        Ok(())
    }
}

/// Evidence gathered about one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordLineScore {
    /// Whether the line has at least one column gap
    pub has_gap: bool,

    /// Non-empty chunks between gaps
    pub chunks: usize,

    /// Chunks that match the chord shape
    pub chord_chunks: usize,
}

impl ChordLineScore {
    /// Share of chunks that look like chords, 0.0 for an empty line
    pub fn ratio(&self) -> f32 {
        if self.chunks == 0 {
            0.0
        } else {
            self.chord_chunks as f32 / self.chunks as f32
        }
    }

    pub fn is_chord_line(&self, config: &ClassifierConfig) -> bool {
        self.has_gap
            && self.chunks > 0
            && self.chord_chunks as f32 >= self.chunks as f32 * config.chord_ratio
    }
}

/// Check a single chunk against the chord shape
pub fn is_chord_symbol(chunk: &str) -> bool {
    CHORD_CHUNK.is_match(chunk.trim())
}

/// Split a line wherever `min_gap` or more whitespace characters run together.
///
/// Returns the raw pieces (possibly empty or padded) and whether any gap was
/// found at all.
pub fn split_on_gaps(line: &str, min_gap: usize) -> (Vec<&str>, bool) {
    let mut pieces = Vec::new();
    let mut has_gap = false;
    let mut piece_start = 0;
    let mut run_start = 0;
    let mut run_len = 0;

    for (idx, ch) in line.char_indices() {
        if ch.is_whitespace() {
            if run_len == 0 {
                run_start = idx;
            }
            run_len += 1;
            continue;
        }

        if run_len >= min_gap {
            pieces.push(&line[piece_start..run_start]);
            piece_start = idx;
            has_gap = true;
        }
        run_len = 0;
    }

    if run_len >= min_gap {
        pieces.push(&line[piece_start..run_start]);
        has_gap = true;
    } else {
        pieces.push(&line[piece_start..]);
    }

    (pieces, has_gap)
}

/// Score a line against the chord-row heuristic
pub fn score_chord_line(line: &str, config: &ClassifierConfig) -> ChordLineScore {
    if line.trim().is_empty() {
        return ChordLineScore::default();
    }

    let (pieces, has_gap) = split_on_gaps(line, config.min_gap);
    let chunks: Vec<&str> = pieces
        .into_iter()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect();

    ChordLineScore {
        has_gap,
        chunks: chunks.len(),
        chord_chunks: chunks.iter().filter(|chunk| is_chord_symbol(chunk)).count(),
    }
}

/// Default-config shortcut used by the chart layout
pub fn is_likely_chord_line(line: &str) -> bool {
    let config = ClassifierConfig::default();
    score_chord_line(line, &config).is_chord_line(&config)
}
