//! Testing utilities for Citation Eval
//!
//! This crate provides:
//! - Fixtures with realistic Arabic responses and their span tables
//! - Builder patterns for span scoring cases
//! - A temporary scoring workspace laid out like the evaluation container
//! - Proptest strategies for span tables
//!
//! # Examples
//!
//! ```
//! use citation_eval_testing::SpanCaseBuilder;
//! use citation_eval_domain::{ReferenceLabel, SpanType};
//!
//! let case = SpanCaseBuilder::new()
//!     .with_question("Q1", "قال الله تعالى")
//!     .with_reference("Q1", 0, 8, ReferenceLabel::Ayah)
//!     .with_prediction("Q1", 0, 8, SpanType::Ayah)
//!     .build();
//!
//! assert_eq!(case.reference.len(), 1);
//! ```

pub mod builders;
pub mod fixtures;
pub mod strategies;
pub mod workspace;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use workspace::ScoringWorkspace;

// Re-export testing dependencies for convenience
pub use proptest;
pub use tempfile;
