//! Per-character label arrays.
//!
//! A response text is rasterized into one [`CharTag`] per Unicode scalar
//! value. Spans are painted in row order, so a later span overwrites an
//! earlier one where they overlap.

use crate::span::CitationKind;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Tag assigned to a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum CharTag {
    Normal = 0,
    Ayah = 1,
    Hadith = 2,
}

impl CharTag {
    /// All tags in class-index order
    pub const ALL: [CharTag; 3] = [CharTag::Normal, CharTag::Ayah, CharTag::Hadith];

    /// Class index used by the confusion counts
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<CitationKind> for CharTag {
    fn from(kind: CitationKind) -> Self {
        match kind {
            CitationKind::Ayah => CharTag::Ayah,
            CitationKind::Hadith => CharTag::Hadith,
        }
    }
}

/// Number of characters in a response, as the span indices count them
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Label array for one response text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelArray {
    tags: Vec<CharTag>,
}

impl LabelArray {
    /// An all-`Normal` array of `len` characters
    pub fn normal(len: usize) -> Self {
        Self {
            tags: vec![CharTag::Normal; len],
        }
    }

    /// An all-`Normal` array sized to `text`
    pub fn for_text(text: &str) -> Self {
        Self::normal(char_len(text))
    }

    /// Paint `range` with the tag for `kind`.
    ///
    /// Returns `false` and leaves the array untouched when the range does not
    /// fit; callers validate spans first, so this never grows the array.
    pub fn paint(&mut self, range: Range<usize>, kind: CitationKind) -> bool {
        match self.tags.get_mut(range) {
            Some(slice) => {
                slice.fill(CharTag::from(kind));
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[CharTag] {
        &self.tags
    }

    /// Count of characters carrying `tag`
    pub fn count(&self, tag: CharTag) -> usize {
        self.tags.iter().filter(|&&t| t == tag).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars_not_bytes() {
        let text = "قال الله";
        assert_eq!(char_len(text), 8);
        assert!(text.len() > 8);
    }

    #[test]
    fn test_paint_last_write_wins() {
        let mut array = LabelArray::normal(10);
        assert!(array.paint(0..6, CitationKind::Ayah));
        assert!(array.paint(4..8, CitationKind::Hadith));

        assert_eq!(array.count(CharTag::Ayah), 4);
        assert_eq!(array.count(CharTag::Hadith), 4);
        assert_eq!(array.count(CharTag::Normal), 2);
        assert_eq!(array.as_slice()[5], CharTag::Hadith);
    }

    #[test]
    fn test_paint_out_of_range_is_rejected() {
        let mut array = LabelArray::normal(3);
        assert!(!array.paint(1..5, CitationKind::Ayah));
        assert_eq!(array.len(), 3);
        assert_eq!(array.count(CharTag::Normal), 3);
    }

    #[test]
    fn test_empty_range_paints_nothing() {
        let mut array = LabelArray::normal(3);
        assert!(array.paint(2..2, CitationKind::Hadith));
        assert_eq!(array.count(CharTag::Normal), 3);
    }
}
