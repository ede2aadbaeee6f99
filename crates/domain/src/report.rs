//! Score reports and per-question outcomes.

use crate::identifiers::QuestionId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Report key for Subtask 1A
pub const F1_SCORE_KEY: &str = "F1 Score";

/// Report key for Subtasks 1B and 1C
pub const ACCURACY_KEY: &str = "accuracy";

/// Mapping from metric name to value, serialized as a flat JSON object.
///
/// ```rust
/// use citation_eval_domain::report::{ScoreReport, F1_SCORE_KEY};
///
/// let report = ScoreReport::single(F1_SCORE_KEY, 0.75);
/// assert_eq!(serde_json::to_string(&report).unwrap(), r#"{"F1 Score":0.75}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreReport {
    metrics: IndexMap<String, f64>,
}

impl ScoreReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A report holding one metric
    pub fn single(name: impl Into<String>, value: f64) -> Self {
        Self::new().with_metric(name, value)
    }

    /// Add or replace a metric
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.metrics.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

/// How one reference question fed into the span score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QuestionOutcome {
    /// Absent from the prediction file; excluded from the denominator
    Missing,
    /// `NoAnnotation` reference matched by a `No_Spans` prediction
    NoAnnotationMatched,
    /// `NoAnnotation` reference but spans were predicted
    NoAnnotationMismatched,
    /// Reference has spans but the prediction says `No_Spans`
    NoSpansPredicted,
    /// Character-level macro-F1 between the two label arrays
    Scored { f1: f64 },
}

impl QuestionOutcome {
    /// Whether the question counts toward the denominator
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Amount added to the running total
    pub fn contribution(&self) -> f64 {
        match self {
            Self::Missing | Self::NoAnnotationMismatched | Self::NoSpansPredicted => 0.0,
            Self::NoAnnotationMatched => 1.0,
            Self::Scored { f1 } => *f1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NoAnnotationMatched => "no_annotation_matched",
            Self::NoAnnotationMismatched => "no_annotation_mismatched",
            Self::NoSpansPredicted => "no_spans_predicted",
            Self::Scored { .. } => "scored",
        }
    }
}

/// Outcome of one reference question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionScore {
    pub question_id: QuestionId,
    #[serde(flatten)]
    pub outcome: QuestionOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_preserves_insertion_order() {
        let report = ScoreReport::new()
            .with_metric("b", 1.0)
            .with_metric("a", 0.5);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"b":1.0,"a":0.5}"#);
    }

    #[test]
    fn test_outcome_contribution() {
        assert_eq!(QuestionOutcome::NoAnnotationMatched.contribution(), 1.0);
        assert_eq!(QuestionOutcome::NoSpansPredicted.contribution(), 0.0);
        assert_eq!(QuestionOutcome::Scored { f1: 0.25 }.contribution(), 0.25);
        assert!(!QuestionOutcome::Missing.is_valid());
        assert!(QuestionOutcome::NoAnnotationMismatched.is_valid());
    }

    #[test]
    fn test_question_score_serialization() {
        let score = QuestionScore {
            question_id: QuestionId::new("Q1"),
            outcome: QuestionOutcome::Scored { f1: 1.0 },
        };
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["question_id"], "Q1");
        assert_eq!(json["outcome"], "scored");
        assert_eq!(json["f1"], 1.0);
    }
}
