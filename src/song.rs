//! Song sheet preparation
//!
//! Picks the key a song is shown in and produces the chart in that key.
//! A service (a planned worship set) may ask for a song in a key other than
//! the one it was written in; otherwise the song's own default key is used,
//! and `C` when the song has none.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::structure::{layout_chart_with, ChartLine, ClassifierConfig};
use crate::transposition::transpose_chart;

pub const FALLBACK_KEY: &str = "C";

/// A chart ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongSheet {
    /// Key the chart was written in
    pub original_key: String,

    /// Key the chart is shown in
    pub current_key: String,

    /// Chart text in `current_key`
    pub chords: String,

    /// Display records for `chords`
    pub lines: Vec<ChartLine>,
}

impl SongSheet {
    pub fn prepare(chords: &str, default_key: Option<&str>, service_key: Option<&str>) -> Self {
        Self::prepare_with(chords, default_key, service_key, &ClassifierConfig::default())
    }

    pub fn prepare_with(
        chords: &str,
        default_key: Option<&str>,
        service_key: Option<&str>,
        config: &ClassifierConfig,
    ) -> Self {
        let original_key = non_empty(default_key).unwrap_or(FALLBACK_KEY).to_string();
        let current_key = display_key(default_key, service_key).to_string();

        let chords = if current_key == original_key {
            chords.to_string()
        } else {
            transpose_chart(chords, &original_key, &current_key)
        };
        let lines = layout_chart_with(&chords, config);

        Self {
            original_key,
            current_key,
            chords,
            lines,
        }
    }

    /// Re-key the sheet, always starting from the original chart text
    pub fn change_key(&self, original_chords: &str, new_key: &str) -> Self {
        Self::prepare(original_chords, Some(self.original_key.as_str()), Some(new_key))
    }
}

/// Service key if given, else the song's default key, else `C`
pub fn display_key<'a>(default_key: Option<&'a str>, service_key: Option<&'a str>) -> &'a str {
    non_empty(service_key)
        .or_else(|| non_empty(default_key))
        .unwrap_or(FALLBACK_KEY)
}

/// A song with chord text must say which key that text is in
pub fn validate_default_key(chords: &str, default_key: Option<&str>) -> Result<()> {
    if !chords.is_empty() && non_empty(default_key).is_none() {
        return Err(ChartError::MissingDefaultKey);
    }
    Ok(())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_key_precedence() {
        assert_eq!(display_key(Some("G"), Some("A")), "A");
        assert_eq!(display_key(Some("G"), None), "G");
        assert_eq!(display_key(Some("G"), Some("")), "G");
        assert_eq!(display_key(None, None), "C");
        assert_eq!(display_key(Some(""), None), "C");
    }

    #[test]
    fn test_prepare_transposes_to_service_key() {
        let sheet = SongSheet::prepare("G    D\nsing it", Some("G"), Some("A"));
        assert_eq!(sheet.original_key, "G");
        assert_eq!(sheet.current_key, "A");
        assert_eq!(sheet.chords, "A    E\nsing it");
        assert_eq!(sheet.lines.len(), 1);
    }

    #[test]
    fn test_prepare_without_service_key_is_verbatim() {
        let sheet = SongSheet::prepare("Bb   F\nsing it", Some("Bb"), None);
        assert_eq!(sheet.current_key, "Bb");
        assert_eq!(sheet.chords, "Bb   F\nsing it");
    }

    #[test]
    fn test_change_key_back_restores_original() {
        let original = "Bb   F\nsing it";
        let sheet = SongSheet::prepare(original, Some("Bb"), Some("C"));
        assert_eq!(sheet.chords, "C   G\nsing it");

        let back = sheet.change_key(original, "Bb");
        assert_eq!(back.chords, original);
    }

    #[test]
    fn test_validate_default_key() {
        assert!(validate_default_key("", None).is_ok());
        assert!(validate_default_key("C  G", Some("C")).is_ok());
        assert_eq!(
            validate_default_key("C  G", Some("")),
            Err(ChartError::MissingDefaultKey)
        );
        assert_eq!(validate_default_key("C  G", None), Err(ChartError::MissingDefaultKey));
    }
}
