//! Span validation and rasterization into per-character label arrays.

use std::ops::Range;

use citation_eval_domain::{
    IndexConvention, LabelArray, PredictedSpan, QuestionId, RangeViolation, ReferenceSpan,
    ScoringError, ScoringResult, SpanOrigin,
};
use tracing::debug;

/// Check a span against a text of `len` characters and convert it to an
/// exclusive character range.
pub fn checked_range(
    origin: SpanOrigin,
    question_id: &QuestionId,
    start: i64,
    end: i64,
    len: usize,
    convention: IndexConvention,
) -> ScoringResult<Range<usize>> {
    let range_error = |violation| ScoringError::Range {
        origin,
        question_id: question_id.clone(),
        violation,
    };

    if start < 0 {
        return Err(range_error(RangeViolation::NegativeStart { start }));
    }

    let in_bounds = convention
        .max_end(len)
        .is_some_and(|max_end| end >= 0 && end as u64 <= max_end as u64);
    if !in_bounds {
        return Err(range_error(RangeViolation::EndOutOfBounds {
            end,
            len,
            convention,
        }));
    }

    if start > end {
        return Err(range_error(RangeViolation::Inverted { start, end }));
    }

    if convention == IndexConvention::Exclusive && end as usize == len {
        debug!(question_id = %question_id, end, "Span ends at the last character (exclusive indexing)");
    }

    Ok(start as usize..convention.to_exclusive_end(end as usize))
}

fn required_indices(
    origin: SpanOrigin,
    question_id: &QuestionId,
    start: Option<i64>,
    end: Option<i64>,
) -> ScoringResult<(i64, i64)> {
    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(ScoringError::schema(
            format!("{} table", origin),
            format!("citation span for question {} is missing Span_Start or Span_End", question_id),
        )),
    }
}

/// Paint every predicted span of one question, in row order.
///
/// `No_Spans` rows carry no citation and are skipped.
pub fn rasterize_predictions(
    question_id: &QuestionId,
    text_len: usize,
    rows: &[&PredictedSpan],
    convention: IndexConvention,
) -> ScoringResult<LabelArray> {
    let mut array = LabelArray::normal(text_len);

    for row in rows {
        let Some(kind) = row.span_type.citation() else {
            continue;
        };
        let (start, end) = required_indices(SpanOrigin::Prediction, question_id, row.start, row.end)?;
        let range = checked_range(
            SpanOrigin::Prediction,
            question_id,
            start,
            end,
            text_len,
            convention,
        )?;
        array.paint(range, kind);
    }

    ensure_length(question_id, SpanOrigin::Prediction, &array, text_len)?;
    Ok(array)
}

/// Paint every reference span of one question, in row order.
///
/// Reference ends are always exclusive.
pub fn rasterize_reference(
    question_id: &QuestionId,
    text_len: usize,
    rows: &[&ReferenceSpan],
) -> ScoringResult<LabelArray> {
    let mut array = LabelArray::normal(text_len);

    for row in rows {
        let Some(kind) = row.label.citation() else {
            continue;
        };
        let (start, end) = required_indices(SpanOrigin::Reference, question_id, row.start, row.end)?;
        let range = checked_range(
            SpanOrigin::Reference,
            question_id,
            start,
            end,
            text_len,
            IndexConvention::Exclusive,
        )?;
        array.paint(range, kind);
    }

    ensure_length(question_id, SpanOrigin::Reference, &array, text_len)?;
    Ok(array)
}

fn ensure_length(
    question_id: &QuestionId,
    origin: SpanOrigin,
    array: &LabelArray,
    expected: usize,
) -> ScoringResult<()> {
    if array.len() != expected {
        return Err(ScoringError::Consistency {
            question_id: question_id.clone(),
            array: origin,
            expected,
            actual: array.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use citation_eval_domain::{CharTag, ReferenceLabel, SpanType};

    fn qid() -> QuestionId {
        QuestionId::new("Q1")
    }

    #[test]
    fn test_exclusive_end_at_length_is_accepted() {
        let range = checked_range(SpanOrigin::Prediction, &qid(), 6, 11, 11, IndexConvention::Exclusive)
            .unwrap();
        assert_eq!(range, 6..11);
    }

    #[test]
    fn test_inclusive_end_at_length_is_rejected() {
        let err = checked_range(SpanOrigin::Prediction, &qid(), 6, 11, 11, IndexConvention::Inclusive)
            .unwrap_err();
        assert!(matches!(
            err,
            ScoringError::Range {
                violation: RangeViolation::EndOutOfBounds { end: 11, len: 11, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_inclusive_end_converted() {
        let range = checked_range(SpanOrigin::Prediction, &qid(), 0, 4, 11, IndexConvention::Inclusive)
            .unwrap();
        assert_eq!(range, 0..5);
    }

    #[test]
    fn test_negative_and_inverted_spans() {
        let err = checked_range(SpanOrigin::Prediction, &qid(), -1, 3, 11, IndexConvention::Exclusive)
            .unwrap_err();
        assert!(matches!(
            err,
            ScoringError::Range { violation: RangeViolation::NegativeStart { start: -1 }, .. }
        ));

        let err = checked_range(SpanOrigin::Prediction, &qid(), 5, 3, 11, IndexConvention::Exclusive)
            .unwrap_err();
        assert!(matches!(
            err,
            ScoringError::Range { violation: RangeViolation::Inverted { start: 5, end: 3 }, .. }
        ));
    }

    #[test]
    fn test_rasterize_predictions_overlap_last_write_wins() {
        let rows = [
            PredictedSpan::new("Q1", 0, 6, SpanType::Ayah),
            PredictedSpan::new("Q1", 3, 8, SpanType::Hadith),
        ];
        let refs: Vec<&PredictedSpan> = rows.iter().collect();
        let array = rasterize_predictions(&qid(), 10, &refs, IndexConvention::Exclusive).unwrap();

        assert_eq!(array.count(CharTag::Ayah), 3);
        assert_eq!(array.count(CharTag::Hadith), 5);
        assert_eq!(array.len(), 10);
    }

    #[test]
    fn test_rasterize_reference_skips_no_annotation_rows() {
        let rows = [
            ReferenceSpan::new("Q1", 0, 2, ReferenceLabel::Hadith),
            ReferenceSpan::no_annotation("Q1"),
        ];
        let refs: Vec<&ReferenceSpan> = rows.iter().collect();
        let array = rasterize_reference(&qid(), 4, &refs).unwrap();
        assert_eq!(array.count(CharTag::Hadith), 2);
    }

    #[test]
    fn test_reference_out_of_bounds_names_reference() {
        let rows = [ReferenceSpan::new("Q1", 0, 9, ReferenceLabel::Ayah)];
        let refs: Vec<&ReferenceSpan> = rows.iter().collect();
        let err = rasterize_reference(&qid(), 4, &refs).unwrap_err();
        assert!(matches!(err, ScoringError::Range { origin: SpanOrigin::Reference, .. }));
    }

    #[test]
    fn test_citation_row_without_indices_is_schema_error() {
        let row = PredictedSpan {
            question_id: qid(),
            start: Some(0),
            end: None,
            span_type: SpanType::Ayah,
        };
        let err = rasterize_predictions(&qid(), 4, &[&row], IndexConvention::Exclusive).unwrap_err();
        assert_eq!(err.error_code(), "SCHEMA_ERROR");
    }
}
