//! Citation Eval Domain Types
//!
//! Core data model for scoring the Arabic religious-citation shared task:
//! span detection (Subtask 1A), citation classification (Subtask 1B) and
//! citation correction (Subtask 1C).
//!
//! ## Modules
//!
//! - **identifiers**: String-backed question and sequence identifiers
//! - **span**: Reference and predicted spans, labels, index conventions
//! - **labels**: Per-character label arrays used for span F1
//! - **response**: Question responses extracted from the reference XML
//! - **classification**: Correct/Incorrect rows
//! - **correction**: Correction rows and the Quran/Hadith corpus records
//! - **report**: Score reports and per-question outcomes
//! - **errors**: The fatal error taxonomy shared by every scorer
//!
//! ## Usage
//!
//! ```rust
//! use citation_eval_domain::{
//!     labels::LabelArray,
//!     span::CitationKind,
//! };
//!
//! let mut array = LabelArray::for_text("Hello world");
//! array.paint(0..5, CitationKind::Ayah);
//! assert_eq!(array.len(), 11);
//! ```

#![warn(clippy::all)]

pub mod classification;
pub mod correction;
pub mod errors;
pub mod identifiers;
pub mod labels;
pub mod report;
pub mod response;
pub mod span;

// Re-export commonly used types
pub use classification::{ClassificationLabel, ClassificationRow};
pub use correction::{CitationSources, CorrectionRow, HadithRecord, QuranVerse};
pub use errors::{LabelParseError, RangeViolation, ScoringError, ScoringResult, SpanOrigin};
pub use identifiers::{QuestionId, SequenceId};
pub use labels::{char_len, CharTag, LabelArray};
pub use report::{QuestionOutcome, QuestionScore, ScoreReport, ACCURACY_KEY, F1_SCORE_KEY};
pub use response::ResponseSet;
pub use span::{CitationKind, IndexConvention, PredictedSpan, ReferenceLabel, ReferenceSpan, SpanType};
