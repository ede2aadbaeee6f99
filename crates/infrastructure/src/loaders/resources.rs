//! Quran and Hadith corpus files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use citation_eval_domain::{CitationSources, ScoringError, ScoringResult};
use serde::de::DeserializeOwned;
use tracing::info;

fn load_json_array<T: DeserializeOwned>(path: &Path, what: &str) -> ScoringResult<Vec<T>> {
    if !path.exists() {
        return Err(ScoringError::MissingFile(format!(
            "{} file not found at {}",
            what,
            path.display()
        )));
    }
    let file = File::open(path).map_err(|e| ScoringError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ScoringError::schema(super::origin(path), e.to_string()))
}

/// Load both corpora. Null entries are kept so that counts match the files.
pub fn load_sources(quran_path: &Path, hadith_path: &Path) -> ScoringResult<CitationSources> {
    let quran = load_json_array(quran_path, "Quranic verses")?;
    info!(path = %quran_path.display(), verses = quran.len(), "Loaded Quranic verses");

    let hadith = load_json_array(hadith_path, "Hadith books")?;
    info!(path = %hadith_path.display(), records = hadith.len(), "Loaded Hadith books");

    Ok(CitationSources { quran, hadith })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_sources_with_nulls() {
        let dir = TempDir::new().unwrap();
        let quran = dir.path().join("quranic_verses.json");
        let hadith = dir.path().join("six_hadith_books.json");
        fs::write(&quran, r#"[{"ayah_text": "a", "surah": 1}, null, {"ayah_text": null}]"#).unwrap();
        fs::write(&hadith, r#"[{"hadithTxt": "b", "Matn": "c"}, {"Matn": "d"}, null]"#).unwrap();

        let sources = load_sources(&quran, &hadith).unwrap();
        assert_eq!(sources.quran.len(), 3);
        assert_eq!(sources.verse_texts().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(sources.hadith_texts().collect::<Vec<_>>(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_missing_corpus_file() {
        let dir = TempDir::new().unwrap();
        let err = load_sources(&dir.path().join("q.json"), &dir.path().join("h.json")).unwrap_err();
        assert!(matches!(err, ScoringError::MissingFile(_)));
        assert!(err.to_string().contains("Quranic verses"));
    }

    #[test]
    fn test_malformed_corpus_file() {
        let dir = TempDir::new().unwrap();
        let quran = dir.path().join("quranic_verses.json");
        fs::write(&quran, "{not json").unwrap();
        let err = load_sources(&quran, &quran).unwrap_err();
        assert_eq!(err.error_code(), "SCHEMA_ERROR");
    }
}
