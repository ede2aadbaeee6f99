//! Application layer for Citation Eval
//!
//! Scorers for the three subtasks, operating on tables already loaded by the
//! infrastructure crate.
//!
//! ## Modules
//!
//! - `scoring::span` - Subtask 1A span detection, character-level macro-F1
//! - `scoring::classification` - Subtask 1B Correct/Incorrect accuracy
//! - `scoring::correction` - Subtask 1C corrected-citation accuracy
//! - `scoring::metrics` - Macro-F1 and accuracy
//! - `scoring::normalize` - Arabic diacritic normalization

pub mod scoring;

// Re-export commonly used types
pub use scoring::{
    CitationCorpus, ClassificationInput, ClassificationScorer, ClassificationSummary,
    CorrectionInput, CorrectionScorer, CorrectionSummary, ScoreSummary, Scorer, SpanScorer,
    SpanScoringInput, SpanSummary,
};
