//! Error types for the chord chart API boundary
//!
//! The transposition and layout core never fails; these errors only come from
//! song validation, classifier configuration, and JS value conversion.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Chord text was supplied without the key it is written in
    #[error("Default key is required when providing chords")]
    MissingDefaultKey,

    /// Classifier settings out of range
    #[error("Invalid classifier config: {0}")]
    InvalidConfig(String),

    /// Value coming from JavaScript did not have the expected shape
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
