//! Citation classification scoring (Subtask 1B).

use citation_eval_domain::{
    ClassificationRow, ScoreReport, ScoringError, ScoringResult, ACCURACY_KEY,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::metrics::accuracy;
use super::{ScoreSummary, Scorer};

#[derive(Debug, Clone, Default)]
pub struct ClassificationInput {
    pub reference: Vec<ClassificationRow>,
    pub predictions: Vec<ClassificationRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationSummary {
    pub accuracy: f64,
    pub correct: usize,
    pub total: usize,
    /// Positions where the two tables name different sequence ids
    pub misaligned_rows: usize,
}

impl ScoreSummary for ClassificationSummary {
    fn report(&self) -> ScoreReport {
        ScoreReport::single(ACCURACY_KEY, self.accuracy)
    }
}

/// Positional accuracy of Correct/Incorrect labels
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationScorer;

impl Scorer for ClassificationScorer {
    type Input = ClassificationInput;
    type Summary = ClassificationSummary;

    fn name(&self) -> &'static str {
        "classification"
    }

    #[instrument(skip_all, fields(rows = input.reference.len()))]
    fn score(&self, input: &ClassificationInput) -> ScoringResult<ClassificationSummary> {
        let total = input.reference.len();
        if input.predictions.len() != total {
            return Err(ScoringError::schema(
                "prediction file",
                format!(
                    "Length of predictions ({}) does not match length of references ({})",
                    input.predictions.len(),
                    total
                ),
            ));
        }

        let truth: Vec<_> = input.reference.iter().map(|row| row.label).collect();
        let predicted: Vec<_> = input.predictions.iter().map(|row| row.label).collect();
        let accuracy = accuracy(&truth, &predicted).ok_or_else(|| {
            ScoringError::EmptyReference("classification reference has no rows".to_string())
        })?;

        let misaligned_rows = input
            .reference
            .iter()
            .zip(&input.predictions)
            .filter(|(r, p)| r.sequence_id != p.sequence_id)
            .count();
        if misaligned_rows > 0 {
            warn!(
                misaligned_rows,
                "Prediction sequence ids differ from the reference order; rows are compared by position"
            );
        }

        let correct = truth.iter().zip(&predicted).filter(|(t, p)| t == p).count();
        info!(accuracy, correct, total, "Classification scoring complete");

        Ok(ClassificationSummary {
            accuracy,
            correct,
            total,
            misaligned_rows,
        })
    }
}
