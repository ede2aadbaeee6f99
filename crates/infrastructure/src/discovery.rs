//! Input discovery by file-name convention.
//!
//! Directory listings are sorted by file name before any selection, so the
//! chosen file does not depend on file system order.

use std::fs;
use std::path::{Path, PathBuf};

use citation_eval_domain::{ScoringError, ScoringResult};
use tracing::{debug, info};

/// Suffix that marks the span reference table (case-sensitive)
pub const SPAN_REFERENCE_MARKER: &str = "HIDDEN.tsv";

/// Suffix that marks the classification and correction reference tables
pub const HIDDEN_REFERENCE_MARKER: &str = "hidden.tsv";

/// How a reference marker is compared with file names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCase {
    Sensitive,
    Insensitive,
}

/// File names in `dir`, sorted
pub fn list_files(dir: &Path) -> ScoringResult<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| ScoringError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScoringError::io(dir, e))?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    debug!(dir = %dir.display(), files = ?names, "Listed directory");
    Ok(names)
}

fn first_match(dir: &Path, names: &[String], pred: impl Fn(&str) -> bool) -> Option<PathBuf> {
    names
        .iter()
        .find(|name| pred(name.as_str()))
        .map(|name| dir.join(name))
}

/// First `*.xml` file of the reference directory
pub fn find_xml(dir: &Path) -> ScoringResult<PathBuf> {
    let names = list_files(dir)?;
    first_match(dir, &names, |name| name.ends_with(".xml")).ok_or_else(|| {
        ScoringError::MissingFile(format!(
            "No XML file found in the reference directory {}",
            dir.display()
        ))
    })
}

/// First reference table whose name ends with `marker`
pub fn find_reference(dir: &Path, marker: &str, case: MarkerCase) -> ScoringResult<PathBuf> {
    let names = list_files(dir)?;
    let marker_lower = marker.to_lowercase();
    let matches = |name: &str| match case {
        MarkerCase::Sensitive => name.ends_with(marker),
        MarkerCase::Insensitive => name.to_lowercase().ends_with(&marker_lower),
    };

    let path = first_match(dir, &names, matches).ok_or_else(|| {
        ScoringError::MissingFile(format!(
            "No reference file ending in {} found in the reference directory {}",
            marker,
            dir.display()
        ))
    })?;
    info!(path = %path.display(), "Found reference file");
    Ok(path)
}

/// Span submission: the first `*.tsv`, else the first non-hidden file
pub fn find_span_prediction(dir: &Path) -> ScoringResult<PathBuf> {
    let names = list_files(dir)?;
    let path = first_match(dir, &names, |name| name.ends_with(".tsv"))
        .or_else(|| first_match(dir, &names, |name| !name.starts_with('.')))
        .ok_or_else(|| missing_prediction(dir))?;
    info!(path = %path.display(), "Found prediction file");
    Ok(path)
}

/// Classification or correction submission: the first `*.tsv`
pub fn find_tsv_prediction(dir: &Path) -> ScoringResult<PathBuf> {
    let names = list_files(dir)?;
    let path = first_match(dir, &names, |name| name.ends_with(".tsv"))
        .ok_or_else(|| missing_prediction(dir))?;
    info!(path = %path.display(), "Found prediction file");
    Ok(path)
}

fn missing_prediction(dir: &Path) -> ScoringError {
    ScoringError::MissingFile(format!(
        "No prediction file found in {}; submit exactly one file in TSV format",
        dir.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in files {
            fs::write(dir.path().join(name), "").unwrap();
        }
        dir
    }

    #[test]
    fn test_listing_is_sorted() {
        let dir = dir_with(&["b.tsv", "a.tsv", "c.xml"]);
        assert_eq!(list_files(dir.path()).unwrap(), vec!["a.tsv", "b.tsv", "c.xml"]);
    }

    #[test]
    fn test_find_xml() {
        let dir = dir_with(&["ref_HIDDEN.tsv", "questions.xml"]);
        assert!(find_xml(dir.path()).unwrap().ends_with("questions.xml"));

        let empty = dir_with(&["ref_HIDDEN.tsv"]);
        assert!(matches!(find_xml(empty.path()), Err(ScoringError::MissingFile(_))));
    }

    #[test]
    fn test_span_reference_marker_is_case_sensitive() {
        let dir = dir_with(&["dev_hidden.tsv"]);
        assert!(find_reference(dir.path(), SPAN_REFERENCE_MARKER, MarkerCase::Sensitive).is_err());
        assert!(find_reference(dir.path(), SPAN_REFERENCE_MARKER, MarkerCase::Insensitive).is_ok());
    }

    #[test]
    fn test_span_prediction_falls_back_to_any_visible_file() {
        let dir = dir_with(&[".DS_Store", "submission.txt"]);
        assert!(find_span_prediction(dir.path()).unwrap().ends_with("submission.txt"));

        let tsv_first = dir_with(&["a.txt", "z.tsv"]);
        assert!(find_span_prediction(tsv_first.path()).unwrap().ends_with("z.tsv"));
    }

    #[test]
    fn test_tsv_prediction_required() {
        let dir = dir_with(&["submission.txt"]);
        assert!(matches!(
            find_tsv_prediction(dir.path()),
            Err(ScoringError::MissingFile(_))
        ));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = list_files(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
