//! Error types for puzzle generation, dictionary loading and record parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a puzzle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Malformed or empty letter input, or inconsistent engine arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The letter set admits too few dictionary words.
    #[error("Insufficient vocabulary: found {found} usable words, need {required}")]
    InsufficientVocabulary { found: usize, required: usize },

    /// No attempt reached the minimum word count.
    #[error("Placement exhausted: best attempt placed {best} words, need {required}")]
    PlacementExhausted { best: usize, required: usize },

    /// Every session attempt for this id failed.
    #[error("Failed to generate puzzle {id} after {attempts} attempts")]
    PuzzleGenerationFailure { id: u64, attempts: usize },
}

impl GenerateError {
    /// Whether a session should resample letters and try again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientVocabulary { .. } | Self::PlacementExhausted { .. }
        )
    }
}

/// Errors raised by the dictionary loaders.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list could not be read.
    #[error("Dictionary unavailable at {path}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The word list contained no usable words.
    #[error("Dictionary contains no usable words")]
    Empty,
}

/// Errors raised while decoding or replaying puzzle records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Expected 3 '|' separated fields, found {0}")]
    FieldCount(usize),

    #[error("Invalid puzzle id: {0:?}")]
    InvalidId(String),

    #[error("Invalid letters: {0:?}")]
    InvalidLetters(String),

    #[error("Expected 4 ',' separated placement fields in {0:?}")]
    PlacementShape(String),

    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    #[error("Invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("Invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("Record has no placements")]
    NoPlacements,

    /// A placement is out of bounds or disagrees with an earlier one.
    #[error("Placement of {word:?} at ({row}, {col}) does not fit")]
    Conflict { word: String, row: usize, col: usize },

    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<RecordError>,
    },

    #[error("I/O error: {0}")]
    Io(String),
}
