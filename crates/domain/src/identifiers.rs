//! Strongly-typed identifier types for scored records.
//!
//! Question and sequence identifiers both arrive as free-form strings in the
//! reference and prediction tables. Wrapping them keeps a question id from
//! being looked up in a sequence-keyed table by accident.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from raw table text, kept exactly as written
            #[inline]
            pub fn new(raw: impl AsRef<str>) -> Self {
                Self(raw.as_ref().to_string())
            }

            /// Get the identifier as a string slice
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying string
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::new(raw)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    QuestionId,
    "Identifier of a question/response pair (Subtask 1A)"
);

define_id!(
    SequenceId,
    "Identifier of a citation sequence (Subtasks 1B and 1C)"
);
