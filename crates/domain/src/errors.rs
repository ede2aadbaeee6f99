//! Error types for scoring runs.
//!
//! Every variant is fatal: a scoring run either produces a full report or
//! stops with one of these, naming the offending file or question.

use crate::identifiers::QuestionId;
use crate::span::IndexConvention;
use std::fmt;
use std::path::PathBuf;

/// Top-level scoring error type
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// No file matched the expected naming pattern
    #[error("Missing file: {0}")]
    MissingFile(String),

    /// Unexpected columns, label values, unparsable rows or unmatched records
    #[error("Schema error in {origin}: {message}")]
    Schema { origin: String, message: String },

    /// Span indices out of bounds or inverted
    #[error("Span out of range in {origin} for question {question_id}: {violation}")]
    Range {
        origin: SpanOrigin,
        question_id: QuestionId,
        violation: RangeViolation,
    },

    /// A derived label array disagrees with the length of its source text
    #[error(
        "Length of {array} character array ({actual}) does not match response text length ({expected}) for question {question_id}"
    )]
    Consistency {
        question_id: QuestionId,
        array: SpanOrigin,
        expected: usize,
        actual: usize,
    },

    /// Every reference question was missing from the prediction file
    #[error("No valid questions to score: none of the {reference_questions} reference questions appear in the prediction file")]
    NoValidQuestions { reference_questions: usize },

    /// Accuracy requested over an empty reference table
    #[error("Reference table is empty: {0}")]
    EmptyReference(String),

    /// Underlying file system failure
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScoringError {
    /// Create a schema error for the given file or table
    pub fn schema(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            origin: origin.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the error code for this error
    ///
    /// Printed by the CLI next to the message so organizers can grep logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFile(_) => "MISSING_FILE",
            Self::Schema { .. } => "SCHEMA_ERROR",
            Self::Range { .. } => "RANGE_ERROR",
            Self::Consistency { .. } => "CONSISTENCY_ERROR",
            Self::NoValidQuestions { .. } => "NO_VALID_QUESTIONS",
            Self::EmptyReference(_) => "EMPTY_REFERENCE",
            Self::Io { .. } => "IO_ERROR",
        }
    }
}

/// Which table a span came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanOrigin {
    /// The hidden reference table
    Reference,
    /// The participant's prediction file
    Prediction,
}

impl fmt::Display for SpanOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            Self::Prediction => f.write_str("prediction"),
        }
    }
}

/// The specific bound a span broke
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeViolation {
    #[error("span start {start} is negative")]
    NegativeStart { start: i64 },

    #[error("span start {start} must not exceed span end {end}")]
    Inverted { start: i64, end: i64 },

    #[error("span end {end} is out of bounds for response text length {len} ({convention} indexing)")]
    EndOutOfBounds {
        end: i64,
        len: usize,
        convention: IndexConvention,
    },
}

/// A label cell held a value outside its closed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected label {value:?}, expected one of: {}", .allowed.join(", "))]
pub struct LabelParseError {
    pub value: String,
    pub allowed: &'static [&'static str],
}

impl LabelParseError {
    pub fn new(value: impl Into<String>, allowed: &'static [&'static str]) -> Self {
        Self {
            value: value.into(),
            allowed,
        }
    }
}

/// Result type for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;
