//! Citation classification records (Subtask 1B).

use crate::errors::LabelParseError;
use crate::identifiers::SequenceId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a citation is quoted correctly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationLabel {
    Correct,
    Incorrect,
}

impl ClassificationLabel {
    pub const ALLOWED: &'static [&'static str] = &["Correct", "Incorrect"];
}

impl FromStr for ClassificationLabel {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Correct" => Ok(Self::Correct),
            "Incorrect" => Ok(Self::Incorrect),
            other => Err(LabelParseError::new(other, Self::ALLOWED)),
        }
    }
}

impl fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => f.write_str("Correct"),
            Self::Incorrect => f.write_str("Incorrect"),
        }
    }
}

/// One labeled sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRow {
    pub sequence_id: SequenceId,
    pub label: ClassificationLabel,
}

impl ClassificationRow {
    pub fn new(sequence_id: impl Into<SequenceId>, label: ClassificationLabel) -> Self {
        Self {
            sequence_id: sequence_id.into(),
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!(
            "Correct".parse::<ClassificationLabel>().unwrap(),
            ClassificationLabel::Correct
        );
        let err = "correct".parse::<ClassificationLabel>().unwrap_err();
        assert!(err.to_string().contains("Correct, Incorrect"));
    }
}
