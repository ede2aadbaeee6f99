//! Tests for discovering and loading a complete scoring directory

use citation_eval_domain::{ScoringError, SpanType};
use citation_eval_infrastructure::discovery::{
    self, MarkerCase, HIDDEN_REFERENCE_MARKER, SPAN_REFERENCE_MARKER,
};
use citation_eval_infrastructure::loaders;
use citation_eval_testing::fixtures::*;
use citation_eval_testing::{ClassificationCaseBuilder, CorrectionCaseBuilder, ScoringWorkspace};
use citation_eval_domain::ClassificationLabel::*;

// ============================================================================
// Span Inputs
// ============================================================================

#[test]
fn test_span_case_round_trips_through_disk() {
    let ws = ScoringWorkspace::new().unwrap();
    let case = create_test_span_case();
    ws.write_span_case(&case).unwrap();

    let xml = discovery::find_xml(&ws.reference_dir()).unwrap();
    let reference =
        discovery::find_reference(&ws.reference_dir(), SPAN_REFERENCE_MARKER, MarkerCase::Sensitive)
            .unwrap();
    let prediction = discovery::find_span_prediction(&ws.prediction_dir()).unwrap();

    let responses = loaders::load_responses(&xml).unwrap();
    assert_eq!(responses.get(&"Q1".into()), Some(AYAH_RESPONSE));
    assert_eq!(loaders::load_reference_spans(&reference).unwrap(), case.reference);
    assert_eq!(loaders::load_predicted_spans(&prediction).unwrap(), case.predictions);
}

#[test]
fn test_hidden_files_are_not_submissions() {
    let ws = ScoringWorkspace::new().unwrap();
    ws.write_prediction(".hidden", "Q1\t\t\tNo_Spans\n").unwrap();

    let err = discovery::find_span_prediction(&ws.prediction_dir()).unwrap_err();
    assert!(matches!(err, ScoringError::MissingFile(_)));
}

#[test]
fn test_non_tsv_span_submission_accepted() {
    let ws = ScoringWorkspace::new().unwrap();
    ws.write_prediction("answer.txt", "Q1\t\t\tNo_Spans\n").unwrap();

    let path = discovery::find_span_prediction(&ws.prediction_dir()).unwrap();
    let spans = loaders::load_predicted_spans(&path).unwrap();
    assert_eq!(spans[0].span_type, SpanType::NoSpans);
}

// ============================================================================
// Classification and Correction Inputs
// ============================================================================

#[test]
fn test_classification_reference_discovery_is_case_sensitive() {
    let ws = ScoringWorkspace::new().unwrap();
    let (reference, predictions) = ClassificationCaseBuilder::new()
        .with_row("1", Correct, Incorrect)
        .build();
    ws.write_classification_case(&reference, &predictions).unwrap();

    let path = discovery::find_reference(
        &ws.reference_dir(),
        HIDDEN_REFERENCE_MARKER,
        MarkerCase::Sensitive,
    )
    .unwrap();
    assert_eq!(loaders::load_classification_reference(&path).unwrap(), reference);
}

#[test]
fn test_correction_inputs() {
    let ws = ScoringWorkspace::new().unwrap();
    let (reference, predictions) = CorrectionCaseBuilder::new()
        .with_row("1", "غفور رحيم", "إن الله غفور رحيم")
        .build();
    ws.write_correction_case(&reference, &predictions).unwrap();
    ws.write_sources(&create_test_sources()).unwrap();

    // Mixed-case "Hidden.tsv" only matches case-insensitively
    assert!(discovery::find_reference(
        &ws.reference_dir(),
        HIDDEN_REFERENCE_MARKER,
        MarkerCase::Sensitive
    )
    .is_err());
    let path = discovery::find_reference(
        &ws.reference_dir(),
        HIDDEN_REFERENCE_MARKER,
        MarkerCase::Insensitive,
    )
    .unwrap();
    assert_eq!(loaders::load_correction_reference(&path).unwrap(), reference);

    let submission = discovery::find_tsv_prediction(&ws.prediction_dir()).unwrap();
    assert_eq!(loaders::load_correction_predictions(&submission).unwrap(), predictions);

    let sources = loaders::load_sources(
        &ws.resources_dir().join("quranic_verses.json"),
        &ws.resources_dir().join("six_hadith_books.json"),
    )
    .unwrap();
    assert_eq!(sources, create_test_sources());
}
