//! Infrastructure layer for Citation Eval
//!
//! This crate provides:
//! - Input discovery by file-name convention
//! - Loaders for the response XML, the TSV tables and the JSON corpora
//! - Score report writing
//!
//! Every loader returns a [`citation_eval_domain::ScoringError`] naming the
//! file and, where there is one, the row that failed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use citation_eval_infrastructure::{discovery, loaders};
//! use std::path::Path;
//!
//! let reference_dir = Path::new("/app/input/ref");
//! let xml = discovery::find_xml(reference_dir)?;
//! let responses = loaders::load_responses(&xml)?;
//! println!("{} responses", responses.len());
//! # Ok::<(), citation_eval_domain::ScoringError>(())
//! ```

pub mod discovery;
pub mod loaders;
pub mod report;

pub use report::{write_details, write_scores};
