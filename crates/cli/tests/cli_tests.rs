//! End-to-end command tests on a temporary evaluation layout

use std::fs;

use citation_eval_cli::commands::{classification, correction, spans, spans::SpanArgs};
use citation_eval_cli::{CommandContext, OutputFormat};
use citation_eval_common::ScorerConfig;
use citation_eval_domain::{ClassificationLabel, ScoringError};
use citation_eval_testing::{
    create_inclusive_span_case, create_test_sources, create_test_span_case,
    ClassificationCaseBuilder, CorrectionCaseBuilder, ScoringWorkspace,
};

fn context(ws: &ScoringWorkspace) -> CommandContext {
    let mut config = ScorerConfig::rooted_at(ws.root());
    config.correction.resources_dir = Some(ws.resources_dir());
    CommandContext::new(config, OutputFormat::Json).quiet()
}

fn read_scores(ws: &ScoringWorkspace) -> serde_json::Value {
    let raw = fs::read_to_string(ws.score_file()).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_spans_perfect_submission() {
    let ws = ScoringWorkspace::new().unwrap();
    ws.write_span_case(&create_test_span_case()).unwrap();

    let summary = spans::run(&context(&ws), &SpanArgs::default()).unwrap();
    assert_eq!(summary.valid_questions, 3);

    let raw = fs::read_to_string(ws.score_file()).unwrap();
    assert_eq!(raw, r#"{"F1 Score":1.0}"#);
}

#[test]
fn test_spans_inclusive_flag() {
    let ws = ScoringWorkspace::new().unwrap();
    ws.write_span_case(&create_inclusive_span_case()).unwrap();

    let exclusive = spans::run(&context(&ws), &SpanArgs::default()).unwrap();
    assert!(exclusive.f1_score < 1.0);

    let args = SpanArgs {
        inclusive: true,
        ..SpanArgs::default()
    };
    let inclusive = spans::run(&context(&ws), &args).unwrap();
    assert_eq!(inclusive.f1_score, 1.0);
    assert_eq!(read_scores(&ws)["F1 Score"], 1.0);
}

#[test]
fn test_spans_details_file() {
    let ws = ScoringWorkspace::new().unwrap();
    ws.write_span_case(&create_test_span_case()).unwrap();

    let args = SpanArgs {
        details_file: Some("question_scores.json".to_string()),
        ..SpanArgs::default()
    };
    spans::run(&context(&ws), &args).unwrap();

    let raw = fs::read_to_string(ws.score_dir().join("question_scores.json")).unwrap();
    let details: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(details["questions"].as_array().unwrap().len(), 3);
    assert_eq!(details["questions"][2]["outcome"], "no_annotation_matched");
}

#[test]
fn test_spans_details_file_must_stay_in_score_dir() {
    let ws = ScoringWorkspace::new().unwrap();
    ws.write_span_case(&create_test_span_case()).unwrap();

    let args = SpanArgs {
        details_file: Some("../escaped.json".to_string()),
        ..SpanArgs::default()
    };
    let err = spans::run(&context(&ws), &args).unwrap_err();
    assert!(err.to_string().contains("must be a plain file name"));
    assert!(!ws.root().join("escaped.json").exists());
    assert!(!ws.score_file().exists());
}

#[test]
fn test_spans_without_prediction_fails() {
    let ws = ScoringWorkspace::new().unwrap();
    let case = create_test_span_case();
    ws.write_span_case(&case).unwrap();
    fs::remove_file(ws.prediction_dir().join("predictions.tsv")).unwrap();

    let err = spans::run(&context(&ws), &SpanArgs::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ScoringError>(),
        Some(ScoringError::MissingFile(_))
    ));
    assert!(!ws.score_file().exists());
}

#[test]
fn test_classification_accuracy() {
    use ClassificationLabel::{Correct, Incorrect};

    let ws = ScoringWorkspace::new().unwrap();
    let (reference, predictions) = ClassificationCaseBuilder::new()
        .with_row("S1", Correct, Correct)
        .with_row("S2", Incorrect, Incorrect)
        .with_row("S3", Correct, Incorrect)
        .with_row("S4", Incorrect, Incorrect)
        .build();
    ws.write_classification_case(&reference, &predictions).unwrap();

    let summary = classification::run(&context(&ws)).unwrap();
    assert_eq!(summary.correct, 3);
    assert_eq!(read_scores(&ws)["accuracy"], 0.75);
}

#[test]
fn test_correction_accuracy() {
    let ws = ScoringWorkspace::new().unwrap();
    ws.write_sources(&create_test_sources()).unwrap();
    let (reference, predictions) = CorrectionCaseBuilder::new()
        .with_row("C1", "إن الله غفور رحيم", "إن الله غفور رحيم")
        .with_row("C2", "الأعمال بالنيات", "إنما الأعمال بالنيات")
        .with_row("C3", "الحمد لله", "الحمد")
        .with_row("C4", "رب العالمين", "الحمد لله رب العالمين يا رب")
        .build();
    ws.write_correction_case(&reference, &predictions).unwrap();

    let summary = correction::run(&context(&ws)).unwrap();
    assert_eq!(summary.exact_matches, 1);
    assert_eq!(summary.corpus_matches, 1);
    assert_eq!(read_scores(&ws)["accuracy"], 0.5);
}

#[test]
fn test_correction_missing_corpus() {
    let ws = ScoringWorkspace::new().unwrap();
    let (reference, predictions) = CorrectionCaseBuilder::new()
        .with_row("C1", "إن الله غفور رحيم", "إن الله غفور رحيم")
        .build();
    ws.write_correction_case(&reference, &predictions).unwrap();

    let err = correction::run(&context(&ws)).unwrap_err();
    assert!(err.to_string().contains("Quranic verses file not found"));
}
