//! Classification metrics over per-character tags and label columns.
//!
//! Macro-F1 follows the usual multi-class convention: only classes that occur
//! in the truth or the prediction are averaged, and a class with no true
//! positives scores 0.

use citation_eval_domain::CharTag;

const CLASSES: usize = CharTag::ALL.len();

/// True/false positive and false negative counts per tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    true_positives: [usize; CLASSES],
    false_positives: [usize; CLASSES],
    false_negatives: [usize; CLASSES],
}

impl ConfusionCounts {
    /// Count paired tags. Extra elements of the longer slice are ignored;
    /// callers check lengths first.
    pub fn from_pairs(truth: &[CharTag], predicted: &[CharTag]) -> Self {
        let mut counts = Self::default();
        for (&t, &p) in truth.iter().zip(predicted) {
            if t == p {
                counts.true_positives[t.index()] += 1;
            } else {
                counts.false_negatives[t.index()] += 1;
                counts.false_positives[p.index()] += 1;
            }
        }
        counts
    }

    /// Whether the tag occurs in either the truth or the prediction
    pub fn is_present(&self, tag: CharTag) -> bool {
        let i = tag.index();
        self.true_positives[i] + self.false_positives[i] + self.false_negatives[i] > 0
    }

    /// F1 for one tag, `2·TP / (2·TP + FP + FN)`, or 0 when undefined
    pub fn f1(&self, tag: CharTag) -> f64 {
        let i = tag.index();
        let tp = self.true_positives[i] as f64;
        let denominator = 2.0 * tp + (self.false_positives[i] + self.false_negatives[i]) as f64;
        if denominator == 0.0 {
            0.0
        } else {
            2.0 * tp / denominator
        }
    }

    /// F1 of every present tag, in tag order
    pub fn per_class_f1(&self) -> Vec<(CharTag, f64)> {
        CharTag::ALL
            .iter()
            .filter(|&&tag| self.is_present(tag))
            .map(|&tag| (tag, self.f1(tag)))
            .collect()
    }

    /// Unweighted mean of the per-tag F1 values, 0 when nothing is present
    pub fn macro_f1(&self) -> f64 {
        let scores = self.per_class_f1();
        if scores.is_empty() {
            return 0.0;
        }
        scores.iter().map(|(_, f1)| f1).sum::<f64>() / scores.len() as f64
    }
}

/// Macro-averaged F1 between two equally long tag arrays
pub fn macro_f1(truth: &[CharTag], predicted: &[CharTag]) -> f64 {
    ConfusionCounts::from_pairs(truth, predicted).macro_f1()
}

/// Fraction of positions where the two columns agree.
///
/// Returns `None` for empty input.
pub fn accuracy<T: PartialEq>(truth: &[T], predicted: &[T]) -> Option<f64> {
    if truth.is_empty() {
        return None;
    }
    let matches = truth
        .iter()
        .zip(predicted)
        .filter(|(t, p)| t == p)
        .count();
    Some(matches as f64 / truth.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharTag::{Ayah, Hadith, Normal};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_identity_scores_one() {
        let tags = vec![Ayah, Ayah, Normal, Hadith, Normal];
        assert!(approx_eq(macro_f1(&tags, &tags), 1.0));
    }

    #[test]
    fn test_absent_class_not_averaged() {
        // Only Normal and Ayah occur; Hadith must not drag the mean down
        let tags = vec![Ayah, Ayah, Normal];
        let counts = ConfusionCounts::from_pairs(&tags, &tags);
        assert!(!counts.is_present(Hadith));
        assert_eq!(counts.per_class_f1().len(), 2);
    }

    #[test]
    fn test_known_values() {
        // truth:     A A A N N
        // predicted: A A N N H
        let truth = vec![Ayah, Ayah, Ayah, Normal, Normal];
        let predicted = vec![Ayah, Ayah, Normal, Normal, Hadith];
        let counts = ConfusionCounts::from_pairs(&truth, &predicted);

        // Ayah: tp=2 fp=0 fn=1 -> 4/5
        assert!(approx_eq(counts.f1(Ayah), 0.8));
        // Normal: tp=1 fp=1 fn=1 -> 2/4
        assert!(approx_eq(counts.f1(Normal), 0.5));
        // Hadith: tp=0 fp=1 fn=0 -> 0
        assert!(approx_eq(counts.f1(Hadith), 0.0));

        assert!(approx_eq(counts.macro_f1(), (0.8 + 0.5 + 0.0) / 3.0));
    }

    #[test]
    fn test_empty_arrays_score_zero() {
        assert_eq!(macro_f1(&[], &[]), 0.0);
    }

    #[test]
    fn test_accuracy() {
        assert_eq!(accuracy(&[1, 2, 3, 4], &[1, 2, 0, 4]), Some(0.75));
        assert_eq!(accuracy::<u8>(&[], &[]), None);
    }
}
