//! Test fixtures with realistic shared-task data.
//!
//! Responses are short Arabic answers that quote a verse or a hadith. Span
//! offsets are character offsets, not byte offsets.

use citation_eval_domain::{
    CitationSources, HadithRecord, QuranVerse, ReferenceLabel, SpanType,
};

use crate::builders::{SpanCase, SpanCaseBuilder};

/// "God said: Indeed, God is forgiving and merciful"
pub const AYAH_RESPONSE: &str = "قال الله تعالى: إن الله غفور رحيم";

/// Character range of the quoted verse inside [`AYAH_RESPONSE`]
pub const AYAH_SPAN: (i64, i64) = (16, 33);

/// "The Prophet said: actions are but by intentions"
pub const HADITH_RESPONSE: &str = "قال النبي: إنما الأعمال بالنيات";

/// Character range of the quoted hadith inside [`HADITH_RESPONSE`]
pub const HADITH_SPAN: (i64, i64) = (11, 31);

/// A response that quotes nothing
pub const PLAIN_RESPONSE: &str = "الصبر مفتاح الفرج";

/// Three questions: one verse, one hadith, one without citations
pub fn create_test_span_case() -> SpanCase {
    SpanCaseBuilder::new()
        .with_question("Q1", AYAH_RESPONSE)
        .with_question("Q2", HADITH_RESPONSE)
        .with_question("Q3", PLAIN_RESPONSE)
        .with_reference("Q1", AYAH_SPAN.0, AYAH_SPAN.1, ReferenceLabel::Ayah)
        .with_reference("Q2", HADITH_SPAN.0, HADITH_SPAN.1, ReferenceLabel::Hadith)
        .with_no_annotation("Q3")
        .predicting_reference()
        .build()
}

/// The test case with every span predicted with an inclusive end
pub fn create_inclusive_span_case() -> SpanCase {
    let mut case = create_test_span_case();
    for row in &mut case.predictions {
        if row.span_type != SpanType::NoSpans {
            row.end = row.end.map(|end| end - 1);
        }
    }
    case
}

/// A small Quran and Hadith corpus
pub fn create_test_sources() -> CitationSources {
    CitationSources {
        quran: vec![
            Some(QuranVerse {
                ayah_text: Some("إن الله غفور رحيم".to_string()),
            }),
            None,
            Some(QuranVerse {
                ayah_text: Some("الحمد لله رب العالمين".to_string()),
            }),
        ],
        hadith: vec![
            Some(HadithRecord {
                hadith_txt: Some("عن عمر قال: إنما الأعمال بالنيات".to_string()),
                matn: Some("إنما الأعمال بالنيات".to_string()),
            }),
            None,
        ],
    }
}
