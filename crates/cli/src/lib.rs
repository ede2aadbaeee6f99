//! Citation Eval CLI Library
//!
//! Command implementations and output formatting for the `citation-eval`
//! binary. Each command discovers its input files, runs one scorer, writes
//! the score report and prints it.

pub mod commands;
pub mod output;

pub use commands::CommandContext;
pub use output::{Formattable, JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
