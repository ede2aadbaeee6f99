//! Output formatting for CLI
//!
//! Score reports and per-run summaries render as JSON, a table or plain
//! `key: value` lines.

use anyhow::Result;
use citation_eval_application::{ClassificationSummary, CorrectionSummary, SpanSummary};
use citation_eval_domain::ScoreReport;
use serde::Serialize;

mod formatters;
mod table;

pub use formatters::{JsonFormatter, PlainFormatter};
pub use table::TableFormatter;

/// Output format of printed reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

/// Trait for types that can be formatted for output
pub trait Formattable: Serialize + Sized {
    /// Format as JSON
    fn format_json(&self) -> Result<String> {
        JsonFormatter::format(self)
    }

    /// Format as table
    fn format_table(&self) -> Result<String>;

    /// Format as plain text
    fn format_plain(&self) -> Result<String> {
        PlainFormatter::format(self)
    }

    /// Format using the specified format
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Table => self.format_table(),
            OutputFormat::Plain => self.format_plain(),
        }
    }
}

impl Formattable for ScoreReport {
    fn format_table(&self) -> Result<String> {
        let rows = self
            .iter()
            .map(|(name, value)| (name, TableFormatter::metric(value)))
            .collect();
        Ok(TableFormatter::key_value(rows))
    }
}

impl Formattable for SpanSummary {
    fn format_table(&self) -> Result<String> {
        Ok(format!(
            "{}\n{} valid of {} reference questions, mean F1 {}",
            TableFormatter::question_breakdown(&self.questions),
            self.valid_questions,
            self.reference_questions,
            TableFormatter::metric(self.f1_score)
        ))
    }
}

impl Formattable for ClassificationSummary {
    fn format_table(&self) -> Result<String> {
        Ok(TableFormatter::key_value(vec![
            ("Rows", self.total.to_string()),
            ("Correct", self.correct.to_string()),
            ("Misaligned rows", self.misaligned_rows.to_string()),
            ("Accuracy", TableFormatter::metric(self.accuracy)),
        ]))
    }
}

impl Formattable for CorrectionSummary {
    fn format_table(&self) -> Result<String> {
        Ok(TableFormatter::key_value(vec![
            ("Rows", self.total.to_string()),
            ("Exact matches", self.exact_matches.to_string()),
            ("Corpus matches", self.corpus_matches.to_string()),
            ("Accuracy", TableFormatter::metric(self.accuracy)),
        ]))
    }
}

/// Color helpers
pub mod colors {
    use colored::*;

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }
}
