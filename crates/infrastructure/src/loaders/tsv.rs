//! Tab-separated reference and submission tables.
//!
//! Reference tables carry a header row and are read by column name.
//! Submissions have no header and are read by position. Errors name the file
//! and the 1-based line of the offending row.

use std::fs::File;
use std::path::Path;

use citation_eval_domain::{
    ClassificationLabel, ClassificationRow, CorrectionRow, PredictedSpan, QuestionId,
    ReferenceLabel, ReferenceSpan, ScoringError, ScoringResult, SpanType,
};
use csv::StringRecord;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;

use super::origin;

#[derive(Debug, Deserialize)]
struct ReferenceSpanRecord {
    #[serde(rename = "Question_ID")]
    question_id: String,
    #[serde(rename = "Span_Start")]
    span_start: String,
    #[serde(rename = "Span_End")]
    span_end: String,
    #[serde(rename = "Label")]
    label: String,
}

#[derive(Debug, Deserialize)]
struct ClassificationRecord {
    #[serde(rename = "Sequence_ID", default)]
    sequence_id: String,
    #[serde(rename = "Label")]
    label: String,
}

#[derive(Debug, Deserialize)]
struct CorrectionRecord {
    #[serde(rename = "Sequence_ID")]
    sequence_id: String,
    #[serde(rename = "Correction")]
    correction: String,
}

/// `Question_ID, Span_Start, Span_End, Span_Type`
type PredictedSpanRecord = (String, String, String, String);

/// `Sequence_ID, Label` or `Sequence_ID, Correction`
type PairRecord = (String, String);

/// A deserialized row and the line it came from
struct Row<T> {
    line: u64,
    record: T,
}

/// Table being read, for error messages
struct Table {
    origin: String,
}

impl Table {
    fn error(&self, line: u64, message: impl std::fmt::Display) -> ScoringError {
        ScoringError::schema(&self.origin, format!("line {}: {}", line, message))
    }
}

fn read_rows<T: DeserializeOwned>(
    path: &Path,
    has_headers: bool,
    required_columns: &[&str],
) -> ScoringResult<(Table, Vec<Row<T>>)> {
    let table = Table {
        origin: origin(path),
    };
    let file = File::open(path).map_err(|e| ScoringError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_headers)
        .from_reader(file);

    let headers: Option<StringRecord> = if has_headers {
        let headers = reader
            .headers()
            .map_err(|e| table.error(1, e))?
            .clone();
        for column in required_columns {
            if !headers.iter().any(|h| h.trim() == *column) {
                return Err(ScoringError::schema(
                    &table.origin,
                    format!("missing required column \"{}\"", column),
                ));
            }
        }
        Some(trimmed(&headers))
    } else {
        None
    };

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let fallback_line = index as u64 + if has_headers { 2 } else { 1 };
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(fallback_line);
            table.error(line, e)
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);
        let parsed: T = record
            .deserialize(headers.as_ref())
            .map_err(|e| table.error(line, e))?;
        rows.push(Row {
            line,
            record: parsed,
        });
    }

    Ok((table, rows))
}

fn trimmed(headers: &StringRecord) -> StringRecord {
    headers.iter().map(str::trim).collect()
}

/// Parse a span index. Blank and `NaN` cells are absent; whole-number floats
/// such as `12.0` are accepted.
fn parse_index(raw: &str) -> Result<Option<i64>, String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(Some(value));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(Some(value as i64)),
        _ => Err(format!("span index {:?} is not an integer", raw)),
    }
}

/// Both indices of a citation row
fn citation_indices(
    table: &Table,
    line: u64,
    start: &str,
    end: &str,
) -> ScoringResult<(Option<i64>, Option<i64>)> {
    let start = parse_index(start).map_err(|e| table.error(line, e))?;
    let end = parse_index(end).map_err(|e| table.error(line, e))?;
    if start.is_none() || end.is_none() {
        return Err(table.error(line, "citation rows need both Span_Start and Span_End"));
    }
    Ok((start, end))
}

/// Reference span table (`Question_ID, Span_Start, Span_End, Label`)
pub fn load_reference_spans(path: &Path) -> ScoringResult<Vec<ReferenceSpan>> {
    let (table, rows) = read_rows::<ReferenceSpanRecord>(
        path,
        true,
        &["Question_ID", "Span_Start", "Span_End", "Label"],
    )?;

    let spans = rows
        .into_iter()
        .map(|Row { line, record }| -> ScoringResult<ReferenceSpan> {
            let label = record
                .label
                .parse::<ReferenceLabel>()
                .map_err(|e| table.error(line, format!("Label: {}", e)))?;
            let (start, end) = match label.citation() {
                Some(_) => citation_indices(&table, line, &record.span_start, &record.span_end)?,
                None => (None, None),
            };
            Ok(ReferenceSpan {
                question_id: QuestionId::new(&record.question_id),
                start,
                end,
                label,
            })
        })
        .collect::<ScoringResult<Vec<_>>>()?;

    info!(path = %path.display(), rows = spans.len(), "Loaded reference spans");
    Ok(spans)
}

/// Headerless span submission
pub fn load_predicted_spans(path: &Path) -> ScoringResult<Vec<PredictedSpan>> {
    let (table, rows) = read_rows::<PredictedSpanRecord>(path, false, &[])?;

    let spans = rows
        .into_iter()
        .map(|Row { line, record: (question_id, start, end, span_type) }| -> ScoringResult<PredictedSpan> {
            let span_type = span_type
                .parse::<SpanType>()
                .map_err(|e| table.error(line, format!("Span_Type: {}", e)))?;
            let (start, end) = match span_type.citation() {
                Some(_) => citation_indices(&table, line, &start, &end)?,
                None => (None, None),
            };
            Ok(PredictedSpan {
                question_id: QuestionId::new(&question_id),
                start,
                end,
                span_type,
            })
        })
        .collect::<ScoringResult<Vec<_>>>()?;

    info!(path = %path.display(), rows = spans.len(), "Loaded predicted spans");
    Ok(spans)
}

fn classification_label(table: &Table, line: u64, raw: &str) -> ScoringResult<ClassificationLabel> {
    raw.parse::<ClassificationLabel>()
        .map_err(|e| table.error(line, format!("Label: {}", e)))
}

/// Classification reference table (needs a `Label` column)
pub fn load_classification_reference(path: &Path) -> ScoringResult<Vec<ClassificationRow>> {
    let (table, rows) = read_rows::<ClassificationRecord>(path, true, &["Label"])?;
    rows.into_iter()
        .map(|Row { line, record }| -> ScoringResult<ClassificationRow> {
            let label = classification_label(&table, line, &record.label)?;
            Ok(ClassificationRow::new(record.sequence_id, label))
        })
        .collect()
}

/// Headerless classification submission (`Sequence_ID, Label`)
pub fn load_classification_predictions(path: &Path) -> ScoringResult<Vec<ClassificationRow>> {
    let (table, rows) = read_rows::<PairRecord>(path, false, &[])?;
    rows.into_iter()
        .map(|Row { line, record: (sequence_id, label) }| -> ScoringResult<ClassificationRow> {
            let label = classification_label(&table, line, &label)?;
            Ok(ClassificationRow::new(sequence_id, label))
        })
        .collect()
}

/// Correction reference table (`Sequence_ID, Correction`)
pub fn load_correction_reference(path: &Path) -> ScoringResult<Vec<CorrectionRow>> {
    let (_, rows) = read_rows::<CorrectionRecord>(path, true, &["Sequence_ID", "Correction"])?;
    Ok(rows
        .into_iter()
        .map(|Row { record, .. }| CorrectionRow::new(record.sequence_id, record.correction))
        .collect())
}

/// Headerless correction submission (`Sequence_ID, Correction`)
pub fn load_correction_predictions(path: &Path) -> ScoringResult<Vec<CorrectionRow>> {
    let (_, rows) = read_rows::<PairRecord>(path, false, &[])?;
    Ok(rows
        .into_iter()
        .map(|Row { record: (sequence_id, correction), .. }| {
            CorrectionRow::new(sequence_id, correction)
        })
        .collect())
}
