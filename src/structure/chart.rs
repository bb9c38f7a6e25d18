//! Chart layout: turn chart text into display records
//!
//! One forward pass with a single line of lookahead. A chord row directly
//! above a plain text line becomes a two-row `ChordLyricPair`; every other
//! line becomes a record of its own.

use serde::{Deserialize, Serialize};

use super::line_analysis::{score_chord_line, ClassifierConfig};

/// A display record for one or two lines of a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChartLine {
    /// Chord row with the lyric row it sits above
    ChordLyricPair { chords: String, lyrics: String },

    /// Bracketed label such as `[Verse 1]`
    SectionHeader { content: String },

    /// Blank or whitespace-only line
    Spacer,

    /// Anything else, including chord rows with nothing to pair with
    Text { content: String },
}

impl ChartLine {
    /// Classify a line that is not part of a pair
    pub fn single(line: &str) -> Self {
        if is_section_header(line) {
            ChartLine::SectionHeader { content: line.to_string() }
        } else if line.trim().is_empty() {
            ChartLine::Spacer
        } else {
            ChartLine::Text { content: line.to_string() }
        }
    }

    /// Label inside the brackets of a section header
    pub fn section_label(&self) -> Option<&str> {
        match self {
            ChartLine::SectionHeader { content } => content
                .trim()
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .map(str::trim),
            _ => None,
        }
    }

    /// Number of source lines this record consumed
    pub fn source_lines(&self) -> usize {
        match self {
            ChartLine::ChordLyricPair { .. } => 2,
            _ => 1,
        }
    }
}

/// `[Verse]`, `  [Chorus x2]  `, ...
pub fn is_section_header(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Lay out a chart with the default classifier settings
pub fn layout_chart(text: &str) -> Vec<ChartLine> {
    layout_chart_with(text, &ClassifierConfig::default())
}

/// Lay out a chart.
///
/// A chord row pairs with the next line only when that line is plain text:
/// not another chord row, not a section header, not blank. Empty input gives
/// no records.
pub fn layout_chart_with(text: &str, config: &ClassifierConfig) -> Vec<ChartLine> {
    if text.is_empty() {
        return Vec::new();
    }

    let is_chord_row = |line: &str| score_chord_line(line, config).is_chord_line(config);
    let lines: Vec<&str> = text.split('\n').collect();
    let mut records = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let current = lines[i];
        let next = lines.get(i + 1).copied();

        match next {
            Some(lyrics) if is_chord_row(current) && is_lyric_line(lyrics, &is_chord_row) => {
                records.push(ChartLine::ChordLyricPair {
                    chords: current.to_string(),
                    lyrics: lyrics.to_string(),
                });
                i += 2;
            }
            _ => {
                records.push(ChartLine::single(current));
                i += 1;
            }
        }
    }

    log::trace!("laid out {} lines into {} records", lines.len(), records.len());
    records
}

fn is_lyric_line(line: &str, is_chord_row: &impl Fn(&str) -> bool) -> bool {
    !line.trim().is_empty() && !is_section_header(line) && !is_chord_row(line)
}

/// Serialize a chart layout to JSON for non-JS consumers
pub fn chart_to_json(text: &str) -> crate::error::Result<String> {
    serde_json::to_string(&layout_chart(text))
        .map_err(|e| crate::error::ChartError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(chords: &str, lyrics: &str) -> ChartLine {
        ChartLine::ChordLyricPair {
            chords: chords.to_string(),
            lyrics: lyrics.to_string(),
        }
    }

    #[test]
    fn test_chord_row_pairs_with_lyrics() {
        let records = layout_chart("C        G\nHere are the words");
        assert_eq!(records, vec![pair("C        G", "Here are the words")]);
    }

    #[test]
    fn test_extended_chord_row_pairs_with_lyrics() {
        let records = layout_chart("Bm7b5    E7#9\nwhen I survey");
        assert_eq!(records, vec![pair("Bm7b5    E7#9", "when I survey")]);
    }

    #[test]
    fn test_section_label_without_brackets() {
        let empty = ChartLine::SectionHeader { content: String::new() };
        assert_eq!(empty.section_label(), None);

        let open = ChartLine::SectionHeader { content: "[".to_string() };
        assert_eq!(open.section_label(), None);

        let bare = ChartLine::SectionHeader { content: "Chorus".to_string() };
        assert_eq!(bare.section_label(), None);

        let blank = ChartLine::SectionHeader { content: " [ ] ".to_string() };
        assert_eq!(blank.section_label(), Some(""));
        assert_eq!(ChartLine::Spacer.section_label(), None);
    }

    #[test]
    fn test_header_never_used_as_lyrics() {
        let records = layout_chart("C    G\n[Chorus]");
        assert_eq!(
            records,
            vec![
                ChartLine::Text { content: "C    G".to_string() },
                ChartLine::SectionHeader { content: "[Chorus]".to_string() },
            ]
        );
        assert_eq!(records[1].section_label(), Some("Chorus"));
    }

    #[test]
    fn test_blank_between_pairs_is_its_own_record() {
        let records = layout_chart("C    G\nline one\n   \nAm   F\nline two");
        assert_eq!(
            records,
            vec![
                pair("C    G", "line one"),
                ChartLine::Spacer,
                pair("Am   F", "line two"),
            ]
        );
    }

    #[test]
    fn test_consecutive_chord_rows_do_not_pair_together() {
        let records = layout_chart("Am   G   F   C\nC    G\nwords");
        assert_eq!(
            records,
            vec![
                ChartLine::Text { content: "Am   G   F   C".to_string() },
                pair("C    G", "words"),
            ]
        );
    }

    #[test]
    fn test_trailing_chord_row_is_single() {
        let records = layout_chart("words first\nC    G");
        assert_eq!(
            records,
            vec![
                ChartLine::Text { content: "words first".to_string() },
                ChartLine::Text { content: "C    G".to_string() },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(layout_chart("").is_empty());
        assert_eq!(layout_chart("\n"), vec![ChartLine::Spacer, ChartLine::Spacer]);
    }

    #[test]
    fn test_source_lines_cover_input() {
        let text = "[Intro]\nC    G\nsing\n\nplain";
        let total: usize = layout_chart(text).iter().map(ChartLine::source_lines).sum();
        assert_eq!(total, text.split('\n').count());
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&pair("C    G", "la")).unwrap();
        assert_eq!(json, r#"{"type":"chord-lyric-pair","chords":"C    G","lyrics":"la"}"#);
        assert_eq!(serde_json::to_string(&ChartLine::Spacer).unwrap(), r#"{"type":"spacer"}"#);
    }

    #[test]
    fn test_chart_to_json() {
        let json = chart_to_json("[Verse]").unwrap();
        assert_eq!(json, r#"[{"type":"section-header","content":"[Verse]"}]"#);
    }
}
