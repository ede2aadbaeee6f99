//! Scoring module - the three subtask scorers
//!
//! Each scorer takes fully loaded tables and produces a summary that reduces
//! to the published score report. Loading and discovery live in the
//! infrastructure crate.

pub mod classification;
pub mod correction;
pub mod metrics;
pub mod normalize;
pub mod rasterize;
pub mod span;

pub use classification::{ClassificationInput, ClassificationScorer, ClassificationSummary};
pub use correction::{CitationCorpus, CorrectionInput, CorrectionScorer, CorrectionSummary};
pub use metrics::{accuracy, macro_f1, ConfusionCounts};
pub use normalize::remove_default_diacritics;
pub use span::{SpanScorer, SpanScoringInput, SpanSummary};

use citation_eval_domain::{ScoreReport, ScoringResult};
use serde::Serialize;

/// A subtask scorer
pub trait Scorer {
    /// Loaded tables the scorer consumes
    type Input;

    /// Detailed result of a run
    type Summary: ScoreSummary;

    /// Scorer name used in logs and progress output
    fn name(&self) -> &'static str;

    /// Score one submission
    fn score(&self, input: &Self::Input) -> ScoringResult<Self::Summary>;
}

/// Detailed scoring result that reduces to a published report
pub trait ScoreSummary: Serialize {
    /// The metrics written to the score file
    fn report(&self) -> ScoreReport;
}
