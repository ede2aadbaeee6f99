//! Proptest strategies for span tables.

use citation_eval_domain::{ReferenceLabel, SpanType};
use proptest::prelude::*;

use crate::builders::{SpanCase, SpanCaseBuilder};

/// Arabic letters and a space, so byte and character offsets differ
const ALPHABET: &[char] = &['ق', 'ا', 'ل', 'ه', 'ن', 'م', ' ', 'ر', 'ح', 'ي'];

/// A non-empty response of up to `max_len` characters
pub fn response_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 1..=max_len)
        .prop_map(|chars| chars.into_iter().collect())
}

fn citation_kind() -> impl Strategy<Value = bool> {
    any::<bool>()
}

/// Non-empty exclusive `(start, end, is_ayah)` spans that fit a text of
/// `len` characters
fn spans_within(len: usize) -> impl Strategy<Value = Vec<(i64, i64, bool)>> {
    prop::collection::vec((0..=len, 0..=len, citation_kind()), 0..4).prop_map(|raw| {
        raw.into_iter()
            .filter(|(a, b, _)| a != b)
            .map(|(a, b, ayah)| {
                let (start, end) = if a < b { (a, b) } else { (b, a) };
                (start as i64, end as i64, ayah)
            })
            .collect()
    })
}

/// A one-question span case with valid, exclusive reference and prediction
/// spans. Empty span lists become `NoAnnotation` / `No_Spans` rows.
pub fn single_question_case() -> impl Strategy<Value = SpanCase> {
    response_text(40)
        .prop_flat_map(|text| {
            let len = text.chars().count();
            (Just(text), spans_within(len), spans_within(len))
        })
        .prop_map(|(text, reference, predicted)| {
            let mut builder = SpanCaseBuilder::new().with_question("Q1", &text);

            if reference.is_empty() {
                builder = builder.with_no_annotation("Q1");
            }
            for (start, end, ayah) in reference {
                let label = if ayah { ReferenceLabel::Ayah } else { ReferenceLabel::Hadith };
                builder = builder.with_reference("Q1", start, end, label);
            }

            if predicted.is_empty() {
                builder = builder.with_no_spans("Q1");
            }
            for (start, end, ayah) in predicted {
                let span_type = if ayah { SpanType::Ayah } else { SpanType::Hadith };
                builder = builder.with_prediction("Q1", start, end, span_type);
            }

            builder.build()
        })
}
