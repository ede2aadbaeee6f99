//! Citation correction scoring (Subtask 1C).
//!
//! A correction is accepted when, after diacritic normalization, it equals
//! the reference, or it contains the reference and is itself a complete
//! verse or hadith from the corpus.

use std::collections::HashSet;

use citation_eval_domain::{
    CitationSources, CorrectionRow, ScoreReport, ScoringError, ScoringResult, SequenceId,
    ACCURACY_KEY,
};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::normalize::remove_default_diacritics;
use super::{ScoreSummary, Scorer};

/// Normalized Quran verses and hadith texts
#[derive(Debug, Clone, Default)]
pub struct CitationCorpus {
    quran: HashSet<String>,
    hadith: HashSet<String>,
}

impl CitationCorpus {
    pub fn from_sources(sources: &CitationSources) -> Self {
        let quran: HashSet<String> = sources.verse_texts().map(remove_default_diacritics).collect();
        let hadith: HashSet<String> = sources.hadith_texts().map(remove_default_diacritics).collect();
        debug!(verses = quran.len(), hadith = hadith.len(), "Built citation corpus");
        Self { quran, hadith }
    }

    /// Whether a normalized text is a complete corpus entry
    pub fn contains(&self, normalized: &str) -> bool {
        self.hadith.contains(normalized) || self.quran.contains(normalized)
    }

    pub fn verse_count(&self) -> usize {
        self.quran.len()
    }

    pub fn hadith_count(&self) -> usize {
        self.hadith.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CorrectionInput {
    pub reference: Vec<CorrectionRow>,
    pub predictions: Vec<CorrectionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrectionSummary {
    pub accuracy: f64,
    pub correct: usize,
    pub total: usize,
    /// Accepted because the normalized texts were identical
    pub exact_matches: usize,
    /// Accepted because the correction is a corpus entry containing the reference
    pub corpus_matches: usize,
}

impl ScoreSummary for CorrectionSummary {
    fn report(&self) -> ScoreReport {
        ScoreReport::single(ACCURACY_KEY, self.accuracy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Exact,
    Corpus,
    Wrong,
}

pub struct CorrectionScorer {
    corpus: CitationCorpus,
}

impl CorrectionScorer {
    pub fn new(corpus: CitationCorpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &CitationCorpus {
        &self.corpus
    }

    /// Judge one correction against its reference text
    pub fn is_correct(&self, predicted: &str, reference: &str) -> bool {
        self.judge(predicted, reference) != Verdict::Wrong
    }

    fn judge(&self, predicted: &str, reference: &str) -> Verdict {
        let predicted = remove_default_diacritics(predicted);
        let reference = remove_default_diacritics(reference);

        if predicted == reference {
            Verdict::Exact
        } else if predicted.contains(reference.as_str()) && self.corpus.contains(&predicted) {
            Verdict::Corpus
        } else {
            Verdict::Wrong
        }
    }
}

impl Scorer for CorrectionScorer {
    type Input = CorrectionInput;
    type Summary = CorrectionSummary;

    fn name(&self) -> &'static str {
        "correction"
    }

    #[instrument(skip_all, fields(rows = input.reference.len()))]
    fn score(&self, input: &CorrectionInput) -> ScoringResult<CorrectionSummary> {
        let mut by_id: IndexMap<&SequenceId, Vec<&CorrectionRow>> = IndexMap::new();
        for row in &input.predictions {
            by_id.entry(&row.sequence_id).or_default().push(row);
        }

        let mut exact_matches = 0;
        let mut corpus_matches = 0;

        for reference in &input.reference {
            let prediction = match by_id.get(&reference.sequence_id).map(Vec::as_slice) {
                Some([only]) => *only,
                Some(_) => {
                    return Err(ScoringError::schema(
                        "prediction file",
                        format!(
                            "Multiple predictions found for Sequence ID {}; each Sequence ID must have exactly one prediction",
                            reference.sequence_id
                        ),
                    ))
                }
                None => {
                    return Err(ScoringError::schema(
                        "prediction file",
                        format!(
                            "Sequence ID {} from the reference file was not found in the prediction file",
                            reference.sequence_id
                        ),
                    ))
                }
            };

            match self.judge(&prediction.correction, &reference.correction) {
                Verdict::Exact => exact_matches += 1,
                Verdict::Corpus => corpus_matches += 1,
                Verdict::Wrong => {
                    debug!(sequence_id = %reference.sequence_id, "Correction rejected");
                }
            }
        }

        let total = input.reference.len();
        if total == 0 {
            return Err(ScoringError::EmptyReference(
                "correction reference has no rows".to_string(),
            ));
        }

        let correct = exact_matches + corpus_matches;
        let accuracy = correct as f64 / total as f64;
        info!(accuracy, correct, total, "Correction scoring complete");

        Ok(CorrectionSummary {
            accuracy,
            correct,
            total,
            exact_matches,
            corpus_matches,
        })
    }
}
