//! Span detection scoring (Subtask 1A).
//!
//! Every reference question is rasterized into a per-character label array on
//! both sides and scored with macro-F1. Questions with no citations are
//! scored by whether the prediction also claims `No_Spans`. The run score is
//! the mean over questions present in the prediction table.

use citation_eval_domain::{
    char_len, IndexConvention, PredictedSpan, QuestionId, QuestionOutcome, QuestionScore,
    ReferenceLabel, ReferenceSpan, ResponseSet, ScoreReport, ScoringError, ScoringResult,
    SpanType, F1_SCORE_KEY,
};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::metrics::ConfusionCounts;
use super::rasterize::{rasterize_predictions, rasterize_reference};
use super::{ScoreSummary, Scorer};

/// Tables for one span scoring run
#[derive(Debug, Clone, Default)]
pub struct SpanScoringInput {
    pub responses: ResponseSet,
    pub reference: Vec<ReferenceSpan>,
    pub predictions: Vec<PredictedSpan>,
}

/// Result of a span scoring run
#[derive(Debug, Clone, Serialize)]
pub struct SpanSummary {
    /// Mean per-question score over valid questions
    pub f1_score: f64,
    /// Questions that counted toward the mean
    pub valid_questions: usize,
    /// Distinct questions in the reference table
    pub reference_questions: usize,
    /// Per-question outcomes, in reference order
    pub questions: Vec<QuestionScore>,
}

impl SpanSummary {
    /// Reference questions that had no prediction rows
    pub fn missing_questions(&self) -> impl Iterator<Item = &QuestionId> {
        self.questions
            .iter()
            .filter(|q| !q.outcome.is_valid())
            .map(|q| &q.question_id)
    }
}

impl ScoreSummary for SpanSummary {
    fn report(&self) -> ScoreReport {
        ScoreReport::single(F1_SCORE_KEY, self.f1_score)
    }
}

/// Scores span predictions against the reference annotation
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanScorer {
    convention: IndexConvention,
}

impl SpanScorer {
    pub fn new(convention: IndexConvention) -> Self {
        Self { convention }
    }

    pub fn convention(&self) -> IndexConvention {
        self.convention
    }

    /// Score one question given its reference and prediction rows.
    ///
    /// Both row lists must be non-empty.
    pub fn score_question(
        &self,
        question_id: &QuestionId,
        text: &str,
        reference: &[&ReferenceSpan],
        predictions: &[&PredictedSpan],
    ) -> ScoringResult<QuestionOutcome> {
        let reference_empty = reference
            .first()
            .is_some_and(|row| row.label == ReferenceLabel::NoAnnotation);
        let prediction_empty = predictions
            .first()
            .is_some_and(|row| row.span_type == SpanType::NoSpans);

        if reference_empty {
            return Ok(if prediction_empty {
                QuestionOutcome::NoAnnotationMatched
            } else {
                QuestionOutcome::NoAnnotationMismatched
            });
        }

        if prediction_empty {
            return Ok(QuestionOutcome::NoSpansPredicted);
        }

        let len = char_len(text);
        let predicted = rasterize_predictions(question_id, len, predictions, self.convention)?;
        let truth = rasterize_reference(question_id, len, reference)?;

        let counts = ConfusionCounts::from_pairs(truth.as_slice(), predicted.as_slice());
        debug!(
            question_id = %question_id,
            per_class = ?counts.per_class_f1(),
            "Scored question"
        );

        Ok(QuestionOutcome::Scored {
            f1: counts.macro_f1(),
        })
    }
}

impl Scorer for SpanScorer {
    type Input = SpanScoringInput;
    type Summary = SpanSummary;

    fn name(&self) -> &'static str {
        "span_detection"
    }

    #[instrument(
        skip(self, input),
        fields(
            convention = %self.convention,
            reference_rows = input.reference.len(),
            prediction_rows = input.predictions.len()
        )
    )]
    fn score(&self, input: &SpanScoringInput) -> ScoringResult<SpanSummary> {
        let reference = group_by_question(&input.reference, |row| &row.question_id);
        let predictions = group_by_question(&input.predictions, |row| &row.question_id);

        let mut questions = Vec::with_capacity(reference.len());
        let mut total = 0.0;
        let mut valid = 0usize;

        for (question_id, reference_rows) in &reference {
            let Some(prediction_rows) = predictions.get(question_id) else {
                warn!(question_id = %question_id, "Question missing from predictions, skipping");
                questions.push(QuestionScore {
                    question_id: (*question_id).clone(),
                    outcome: QuestionOutcome::Missing,
                });
                continue;
            };

            let text = input.responses.get(question_id).ok_or_else(|| {
                ScoringError::schema(
                    "reference XML",
                    format!("no response text for question {}", question_id),
                )
            })?;

            let outcome = self.score_question(question_id, text, reference_rows, prediction_rows)?;
            total += outcome.contribution();
            valid += 1;
            questions.push(QuestionScore {
                question_id: (*question_id).clone(),
                outcome,
            });
        }

        if valid == 0 {
            return Err(ScoringError::NoValidQuestions {
                reference_questions: reference.len(),
            });
        }

        let f1_score = total / valid as f64;
        info!(
            f1_score,
            valid_questions = valid,
            reference_questions = reference.len(),
            "Span scoring complete"
        );

        Ok(SpanSummary {
            f1_score,
            valid_questions: valid,
            reference_questions: reference.len(),
            questions,
        })
    }
}

/// Group rows by question, keeping first-appearance order of questions and
/// file order of rows within a question
fn group_by_question<'a, T>(
    rows: &'a [T],
    key: impl Fn(&'a T) -> &'a QuestionId,
) -> IndexMap<&'a QuestionId, Vec<&'a T>> {
    let mut groups: IndexMap<&QuestionId, Vec<&T>> = IndexMap::new();
    for row in rows {
        groups.entry(key(row)).or_default().push(row);
    }
    groups
}
