//! Citation spans as they appear in the reference and prediction tables.

use crate::errors::LabelParseError;
use crate::identifiers::QuestionId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two kinds of citation a span can mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitationKind {
    /// Quranic verse
    Ayah,
    /// Prophetic narration
    Hadith,
}

impl fmt::Display for CitationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ayah => f.write_str("Ayah"),
            Self::Hadith => f.write_str("Hadith"),
        }
    }
}

/// Whether a span's end coordinate is one past the last character or the
/// last character itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexConvention {
    /// `end` is one past the last character
    #[default]
    Exclusive,
    /// `end` is the last character
    Inclusive,
}

impl IndexConvention {
    /// Map the competition's `EXCLUSIVE_INDEX` switch onto a convention
    pub fn from_exclusive_flag(exclusive: bool) -> Self {
        if exclusive {
            Self::Exclusive
        } else {
            Self::Inclusive
        }
    }

    /// Largest `end` value this convention accepts for a text of `len` characters.
    ///
    /// Returns `None` for inclusive indexing over an empty text, where no end
    /// coordinate is valid.
    pub fn max_end(self, len: usize) -> Option<usize> {
        match self {
            Self::Exclusive => Some(len),
            Self::Inclusive => len.checked_sub(1),
        }
    }

    /// Convert an in-bounds `end` coordinate to its exclusive form
    pub fn to_exclusive_end(self, end: usize) -> usize {
        match self {
            Self::Exclusive => end,
            Self::Inclusive => end + 1,
        }
    }
}

impl fmt::Display for IndexConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclusive => f.write_str("exclusive"),
            Self::Inclusive => f.write_str("inclusive"),
        }
    }
}

/// Label column of the reference span table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceLabel {
    Ayah,
    Hadith,
    /// The question has no expected spans at all
    NoAnnotation,
}

impl ReferenceLabel {
    pub const ALLOWED: &'static [&'static str] = &["Ayah", "Hadith", "NoAnnotation"];

    /// The citation this label paints, if any
    pub fn citation(self) -> Option<CitationKind> {
        match self {
            Self::Ayah => Some(CitationKind::Ayah),
            Self::Hadith => Some(CitationKind::Hadith),
            Self::NoAnnotation => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ayah => "Ayah",
            Self::Hadith => "Hadith",
            Self::NoAnnotation => "NoAnnotation",
        }
    }
}

impl FromStr for ReferenceLabel {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ayah" => Ok(Self::Ayah),
            "Hadith" => Ok(Self::Hadith),
            "NoAnnotation" => Ok(Self::NoAnnotation),
            other => Err(LabelParseError::new(other, Self::ALLOWED)),
        }
    }
}

/// Span_Type column of the prediction file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanType {
    Ayah,
    Hadith,
    /// The participant predicts no spans for the question
    #[serde(rename = "No_Spans")]
    NoSpans,
}

impl SpanType {
    pub const ALLOWED: &'static [&'static str] = &["Ayah", "Hadith", "No_Spans"];

    /// The citation this span type paints, if any
    pub fn citation(self) -> Option<CitationKind> {
        match self {
            Self::Ayah => Some(CitationKind::Ayah),
            Self::Hadith => Some(CitationKind::Hadith),
            Self::NoSpans => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ayah => "Ayah",
            Self::Hadith => "Hadith",
            Self::NoSpans => "No_Spans",
        }
    }
}

impl FromStr for SpanType {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ayah" => Ok(Self::Ayah),
            "Hadith" => Ok(Self::Hadith),
            "No_Spans" => Ok(Self::NoSpans),
            other => Err(LabelParseError::new(other, Self::ALLOWED)),
        }
    }
}

/// One row of the reference span table.
///
/// Indices are optional because `NoAnnotation` rows carry none; rows that
/// mark a citation always have both (enforced by the loader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSpan {
    pub question_id: QuestionId,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub label: ReferenceLabel,
}

impl ReferenceSpan {
    /// Build a citation row with both indices
    pub fn new(question_id: impl Into<QuestionId>, start: i64, end: i64, label: ReferenceLabel) -> Self {
        Self {
            question_id: question_id.into(),
            start: Some(start),
            end: Some(end),
            label,
        }
    }

    /// Build a `NoAnnotation` row
    pub fn no_annotation(question_id: impl Into<QuestionId>) -> Self {
        Self {
            question_id: question_id.into(),
            start: None,
            end: None,
            label: ReferenceLabel::NoAnnotation,
        }
    }
}

/// One row of the prediction file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedSpan {
    pub question_id: QuestionId,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub span_type: SpanType,
}

impl PredictedSpan {
    /// Build a citation row with both indices
    pub fn new(question_id: impl Into<QuestionId>, start: i64, end: i64, span_type: SpanType) -> Self {
        Self {
            question_id: question_id.into(),
            start: Some(start),
            end: Some(end),
            span_type,
        }
    }

    /// Build a `No_Spans` row
    pub fn no_spans(question_id: impl Into<QuestionId>) -> Self {
        Self {
            question_id: question_id.into(),
            start: None,
            end: None,
            span_type: SpanType::NoSpans,
        }
    }
}
