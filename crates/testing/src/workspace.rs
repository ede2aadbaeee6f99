//! Temporary scoring workspace with the evaluation container layout:
//!
//! ```text
//! <root>/input/ref   reference files
//! <root>/input/res   participant submission
//! <root>/output      score report
//! <root>/program     Quran and Hadith corpora
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use citation_eval_domain::{
    CitationSources, ClassificationRow, CorrectionRow, PredictedSpan, ReferenceSpan, ResponseSet,
};
use tempfile::TempDir;

use crate::builders::SpanCase;

/// Reference span table name used by the fixtures
pub const SPAN_REFERENCE_FILE: &str = "Test_Subtask_1A_HIDDEN.tsv";
/// Reference classification table name used by the fixtures
pub const CLASSIFICATION_REFERENCE_FILE: &str = "test_subtask_1b_hidden.tsv";
/// Reference correction table name used by the fixtures
pub const CORRECTION_REFERENCE_FILE: &str = "Test_Subtask_1C_Hidden.tsv";

/// A scoring root on disk, removed when dropped
pub struct ScoringWorkspace {
    dir: TempDir,
}

impl ScoringWorkspace {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temporary workspace")?;
        for sub in ["input/ref", "input/res", "output", "program"] {
            fs::create_dir_all(dir.path().join(sub))
                .with_context(|| format!("Failed to create {}", sub))?;
        }
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn reference_dir(&self) -> PathBuf {
        self.root().join("input").join("ref")
    }

    pub fn prediction_dir(&self) -> PathBuf {
        self.root().join("input").join("res")
    }

    pub fn score_dir(&self) -> PathBuf {
        self.root().join("output")
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.root().join("program")
    }

    pub fn score_file(&self) -> PathBuf {
        self.score_dir().join("scores.json")
    }

    /// Write a raw file into the reference directory
    pub fn write_reference(&self, name: &str, contents: &str) -> Result<PathBuf> {
        write_file(&self.reference_dir(), name, contents)
    }

    /// Write a raw file into the prediction directory
    pub fn write_prediction(&self, name: &str, contents: &str) -> Result<PathBuf> {
        write_file(&self.prediction_dir(), name, contents)
    }

    /// Write a raw file into the resources directory
    pub fn write_resource(&self, name: &str, contents: &str) -> Result<PathBuf> {
        write_file(&self.resources_dir(), name, contents)
    }

    /// Write the XML, reference table and submission of a span case
    pub fn write_span_case(&self, case: &SpanCase) -> Result<()> {
        self.write_reference("test.xml", &responses_xml(&case.responses))?;
        self.write_reference(SPAN_REFERENCE_FILE, &reference_spans_tsv(&case.reference))?;
        self.write_prediction("predictions.tsv", &predicted_spans_tsv(&case.predictions))?;
        Ok(())
    }

    pub fn write_classification_case(
        &self,
        reference: &[ClassificationRow],
        predictions: &[ClassificationRow],
    ) -> Result<()> {
        let mut ref_tsv = String::from("Sequence_ID\tLabel\n");
        for row in reference {
            ref_tsv.push_str(&format!("{}\t{}\n", row.sequence_id, row.label));
        }
        let pred_tsv: String = predictions
            .iter()
            .map(|row| format!("{}\t{}\n", row.sequence_id, row.label))
            .collect();

        self.write_reference(CLASSIFICATION_REFERENCE_FILE, &ref_tsv)?;
        self.write_prediction("predictions.tsv", &pred_tsv)?;
        Ok(())
    }

    pub fn write_correction_case(
        &self,
        reference: &[CorrectionRow],
        predictions: &[CorrectionRow],
    ) -> Result<()> {
        let mut ref_tsv = String::from("Sequence_ID\tCorrection\n");
        for row in reference {
            ref_tsv.push_str(&format!("{}\t{}\n", row.sequence_id, row.correction));
        }
        let pred_tsv: String = predictions
            .iter()
            .map(|row| format!("{}\t{}\n", row.sequence_id, row.correction))
            .collect();

        self.write_reference(CORRECTION_REFERENCE_FILE, &ref_tsv)?;
        self.write_prediction("predictions.tsv", &pred_tsv)?;
        Ok(())
    }

    /// Write both corpus files into the resources directory
    pub fn write_sources(&self, sources: &CitationSources) -> Result<()> {
        let verses = serde_json::to_string(&sources.quran)?;
        let hadith = serde_json::to_string(&sources.hadith)?;
        self.write_resource("quranic_verses.json", &verses)?;
        self.write_resource("six_hadith_books.json", &hadith)?;
        Ok(())
    }
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Render responses the way the task XML wraps them
pub fn responses_xml(responses: &ResponseSet) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Questions>\n");
    for (question_id, text) in responses.iter() {
        xml.push_str(&format!(
            "  <Question>\n    <ID>{}</ID>\n    <Text>...</Text>\n    <Response>{}</Response>\n  </Question>\n",
            question_id, text
        ));
    }
    xml.push_str("</Questions>\n");
    xml
}

/// Reference span table with its header
pub fn reference_spans_tsv(rows: &[ReferenceSpan]) -> String {
    let mut tsv = String::from("Question_ID\tSpan_Start\tSpan_End\tLabel\n");
    for row in rows {
        tsv.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            row.question_id,
            optional_index(row.start),
            optional_index(row.end),
            row.label.as_str()
        ));
    }
    tsv
}

/// Headerless submission span table
pub fn predicted_spans_tsv(rows: &[PredictedSpan]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{}\t{}\t{}\t{}\n",
                row.question_id,
                optional_index(row.start),
                optional_index(row.end),
                row.span_type.as_str()
            )
        })
        .collect()
}

fn optional_index(index: Option<i64>) -> String {
    index.map(|i| i.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_test_span_case;

    #[test]
    fn test_layout_created() {
        let ws = ScoringWorkspace::new().unwrap();
        assert!(ws.reference_dir().is_dir());
        assert!(ws.prediction_dir().is_dir());
        assert!(ws.score_dir().is_dir());
        assert!(ws.resources_dir().is_dir());
    }

    #[test]
    fn test_write_span_case() {
        let ws = ScoringWorkspace::new().unwrap();
        ws.write_span_case(&create_test_span_case()).unwrap();

        let reference = fs::read_to_string(ws.reference_dir().join(SPAN_REFERENCE_FILE)).unwrap();
        assert!(reference.starts_with("Question_ID\tSpan_Start\tSpan_End\tLabel\n"));
        assert!(reference.contains("Q3\t\t\tNoAnnotation"));

        let predictions = fs::read_to_string(ws.prediction_dir().join("predictions.tsv")).unwrap();
        assert!(predictions.starts_with("Q1\t16\t33\tAyah\n"));
    }
}
