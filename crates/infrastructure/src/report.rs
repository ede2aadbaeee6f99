//! Score report output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use citation_eval_domain::ScoreReport;
use serde::Serialize;
use tracing::info;

/// Write the score report as compact JSON, creating `dir` if needed.
///
/// # Returns
///
/// The path of the written file.
pub fn write_scores(report: &ScoreReport, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = write_json(report, dir, file_name, false)?;
    info!(path = %path.display(), "Wrote score report");
    Ok(path)
}

/// Write a per-question breakdown as pretty JSON next to the score report
pub fn write_details<T: Serialize>(details: &T, dir: &Path, file_name: &str) -> Result<PathBuf> {
    write_json(details, dir, file_name, true)
}

fn write_json<T: Serialize>(value: &T, dir: &Path, file_name: &str, pretty: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = dir.join(file_name);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    }
    .with_context(|| format!("Failed to serialize {}", file_name))?;
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use citation_eval_domain::F1_SCORE_KEY;
    use tempfile::TempDir;

    #[test]
    fn test_write_scores_creates_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("output");
        let report = ScoreReport::single(F1_SCORE_KEY, 0.5);

        let path = write_scores(&report, &out, "scores.json").unwrap();
        assert_eq!(path, out.join("scores.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), r#"{"F1 Score":0.5}"#);
    }

    #[test]
    fn test_write_details_is_pretty() {
        let dir = TempDir::new().unwrap();
        let path = write_details(&vec![1, 2], dir.path(), "details.json").unwrap();
        assert!(fs::read_to_string(path).unwrap().contains('\n'));
    }
}
