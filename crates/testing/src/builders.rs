//! Fluent builder pattern for constructing test data.

use citation_eval_domain::{
    ClassificationLabel, ClassificationRow, CorrectionRow, PredictedSpan, ReferenceLabel,
    ReferenceSpan, ResponseSet, SpanType,
};

/// Loaded tables of one span scoring case
#[derive(Debug, Clone, Default)]
pub struct SpanCase {
    pub responses: ResponseSet,
    pub reference: Vec<ReferenceSpan>,
    pub predictions: Vec<PredictedSpan>,
}

impl SpanCase {
    /// Replace the predictions with a copy of the reference spans
    pub fn mirrored(mut self) -> Self {
        self.predictions = self
            .reference
            .iter()
            .map(|row| match (row.label, row.start, row.end) {
                (ReferenceLabel::Ayah, Some(s), Some(e)) => {
                    PredictedSpan::new(row.question_id.clone(), s, e, SpanType::Ayah)
                }
                (ReferenceLabel::Hadith, Some(s), Some(e)) => {
                    PredictedSpan::new(row.question_id.clone(), s, e, SpanType::Hadith)
                }
                _ => PredictedSpan::no_spans(row.question_id.clone()),
            })
            .collect();
        self
    }
}

/// Builder for span scoring cases
#[derive(Debug, Clone, Default)]
pub struct SpanCaseBuilder {
    case: SpanCase,
}

impl SpanCaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_question(mut self, question_id: &str, response: &str) -> Self {
        self.case.responses.insert(question_id.into(), response);
        self
    }

    pub fn with_reference(mut self, question_id: &str, start: i64, end: i64, label: ReferenceLabel) -> Self {
        self.case
            .reference
            .push(ReferenceSpan::new(question_id, start, end, label));
        self
    }

    pub fn with_no_annotation(mut self, question_id: &str) -> Self {
        self.case.reference.push(ReferenceSpan::no_annotation(question_id));
        self
    }

    pub fn with_prediction(mut self, question_id: &str, start: i64, end: i64, span_type: SpanType) -> Self {
        self.case
            .predictions
            .push(PredictedSpan::new(question_id, start, end, span_type));
        self
    }

    pub fn with_no_spans(mut self, question_id: &str) -> Self {
        self.case.predictions.push(PredictedSpan::no_spans(question_id));
        self
    }

    /// Predict exactly the reference spans (with the same, exclusive, ends)
    pub fn predicting_reference(mut self) -> Self {
        self.case = self.case.mirrored();
        self
    }

    pub fn build(self) -> SpanCase {
        self.case
    }
}

/// Builder for paired classification tables
#[derive(Debug, Clone, Default)]
pub struct ClassificationCaseBuilder {
    reference: Vec<ClassificationRow>,
    predictions: Vec<ClassificationRow>,
}

impl ClassificationCaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(
        mut self,
        sequence_id: &str,
        expected: ClassificationLabel,
        predicted: ClassificationLabel,
    ) -> Self {
        self.reference.push(ClassificationRow::new(sequence_id, expected));
        self.predictions.push(ClassificationRow::new(sequence_id, predicted));
        self
    }

    pub fn build(self) -> (Vec<ClassificationRow>, Vec<ClassificationRow>) {
        (self.reference, self.predictions)
    }
}

/// Builder for paired correction tables
#[derive(Debug, Clone, Default)]
pub struct CorrectionCaseBuilder {
    reference: Vec<CorrectionRow>,
    predictions: Vec<CorrectionRow>,
}

impl CorrectionCaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, sequence_id: &str, expected: &str, predicted: &str) -> Self {
        self.reference.push(CorrectionRow::new(sequence_id, expected));
        self.predictions.push(CorrectionRow::new(sequence_id, predicted));
        self
    }

    pub fn build(self) -> (Vec<CorrectionRow>, Vec<CorrectionRow>) {
        (self.reference, self.predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicting_reference_mirrors_rows() {
        let case = SpanCaseBuilder::new()
            .with_question("Q1", "abcdef")
            .with_reference("Q1", 0, 3, ReferenceLabel::Hadith)
            .with_no_annotation("Q2")
            .predicting_reference()
            .build();

        assert_eq!(case.predictions.len(), 2);
        assert_eq!(case.predictions[0].span_type, SpanType::Hadith);
        assert_eq!(case.predictions[1].span_type, SpanType::NoSpans);
    }
}
