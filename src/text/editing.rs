//! Chord editor text operations
//!
//! Pure text insertion at a cursor, with no knowledge of chord semantics.
//! Cursors are character offsets (what a browser textarea reports), not byte
//! offsets, and are clamped to the end of the text.

use serde::{Deserialize, Serialize};

/// Chords offered as one-click inserts
pub const COMMON_CHORDS: [&str; 15] = [
    "C", "G", "D", "A", "E", "F", "Am", "Em", "Dm",
    "G7", "C7", "D7", "Cmaj7", "Fmaj7", "Gsus4",
];

/// Section labels offered as one-click inserts
pub const SECTION_LABELS: [&str; 6] = ["Verse", "Chorus", "Bridge", "Intro", "Outro", "Pre-Chorus"];

/// Sample chart shown in the editor help
pub const EXAMPLE_CHART: &str = "[Verse 1]
C        G        Am       F
Here are some example chords above lyrics
C             G              Am  F
Words should be aligned with the chords above

[Chorus]
F         G       C
This is how a chorus might look
F         G       Am      G
With more chords and lyrics here

[Bridge]
Am   G   F   C
Simple progression
";

/// Text after an insertion and where the cursor lands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResult {
    pub text: String,
    pub cursor: usize,
}

/// Insert `snippet` at character offset `cursor`
pub fn insert_at(text: &str, cursor: usize, snippet: &str) -> EditResult {
    let byte_pos = text
        .char_indices()
        .nth(cursor)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let cursor = text[..byte_pos].chars().count();

    let mut result = String::with_capacity(text.len() + snippet.len());
    result.push_str(&text[..byte_pos]);
    result.push_str(snippet);
    result.push_str(&text[byte_pos..]);

    EditResult {
        text: result,
        cursor: cursor + snippet.chars().count(),
    }
}

/// Insert a chord followed by two spaces of column separation
pub fn insert_chord(text: &str, cursor: usize, chord: &str) -> EditResult {
    insert_at(text, cursor, &format!("{}  ", chord))
}

/// Insert a bracketed section header on its own line
pub fn insert_section(text: &str, cursor: usize, label: &str) -> EditResult {
    insert_at(text, cursor, &format!("\n[{}]\n", label))
}
