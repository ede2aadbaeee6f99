//! Citation correction records and the reference corpus (Subtask 1C).

use crate::identifiers::SequenceId;
use serde::{Deserialize, Serialize};

/// One corrected citation text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRow {
    pub sequence_id: SequenceId,
    pub correction: String,
}

impl CorrectionRow {
    pub fn new(sequence_id: impl Into<SequenceId>, correction: impl Into<String>) -> Self {
        Self {
            sequence_id: sequence_id.into(),
            correction: correction.into(),
        }
    }
}

/// Entry of `quranic_verses.json`; other fields are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuranVerse {
    #[serde(default)]
    pub ayah_text: Option<String>,
}

/// Entry of `six_hadith_books.json`; other fields are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HadithRecord {
    #[serde(rename = "hadithTxt", default)]
    pub hadith_txt: Option<String>,
    #[serde(rename = "Matn", default)]
    pub matn: Option<String>,
}

/// Raw citation sources as loaded from disk, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationSources {
    pub quran: Vec<Option<QuranVerse>>,
    pub hadith: Vec<Option<HadithRecord>>,
}

impl CitationSources {
    /// Every non-null verse text
    pub fn verse_texts(&self) -> impl Iterator<Item = &str> {
        self.quran
            .iter()
            .flatten()
            .filter_map(|v| v.ayah_text.as_deref())
    }

    /// Every non-null full hadith text followed by every non-null matn
    pub fn hadith_texts(&self) -> impl Iterator<Item = &str> {
        let full = self
            .hadith
            .iter()
            .flatten()
            .filter_map(|h| h.hadith_txt.as_deref());
        let matn = self.hadith.iter().flatten().filter_map(|h| h.matn.as_deref());
        full.chain(matn)
    }
}
