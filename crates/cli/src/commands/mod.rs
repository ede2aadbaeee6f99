//! CLI commands

pub mod classification;
pub mod correction;
pub mod spans;

use anyhow::{Context, Result};
use citation_eval_application::{ScoreSummary, Scorer};
use citation_eval_common::ScorerConfig;
use citation_eval_infrastructure::write_scores;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::output::{colors, Formattable, OutputFormat};

/// Context passed to all commands
pub struct CommandContext {
    pub config: ScorerConfig,
    pub format: OutputFormat,
    /// Suppress progress lines on stderr
    pub quiet: bool,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: ScorerConfig, format: OutputFormat) -> Self {
        Self {
            config,
            format,
            quiet: false,
        }
    }

    /// Same context without progress output
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Print a section title
    pub fn title(&self, title: &str) {
        if self.quiet {
            return;
        }
        eprintln!("{}", title.bold().cyan());
        eprintln!("{}", "=".repeat(title.chars().count()));
    }

    /// Print a progress line
    pub fn step(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("  {} {}", "→".blue(), message.as_ref());
        }
    }

    /// Print a warning line
    pub fn warn(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("  {} {}", colors::warning("WARN"), message.as_ref());
        }
    }

    /// Run a scorer, write its report to the score file and print the report.
    ///
    /// Returns the full summary so commands can print or store details.
    pub fn score<S>(&self, scorer: &S, input: &S::Input) -> Result<S::Summary>
    where
        S: Scorer,
    {
        self.step(format!("Scoring with the {} scorer", scorer.name()));
        let summary = scorer
            .score(input)
            .with_context(|| format!("{} scoring failed", scorer.name()))?;
        let report = summary.report();

        let path = write_scores(
            &report,
            &self.config.paths.score_dir(),
            &self.config.paths.score_file,
        )?;
        debug!(scorer = scorer.name(), path = %path.display(), "Score report written");
        if !self.quiet {
            eprintln!(
                "  {} Scores written to {}",
                colors::success("OK"),
                path.display()
            );
        }

        println!("{}", report.format(self.format)?);
        Ok(summary)
    }

    /// Print a run summary as a table on stderr
    pub fn show<T: Formattable>(&self, summary: &T) -> Result<()> {
        if !self.quiet {
            eprintln!("{}", summary.format(OutputFormat::Table)?);
        }
        Ok(())
    }

    pub fn reference_dir(&self) -> PathBuf {
        self.config.paths.reference_dir()
    }

    pub fn prediction_dir(&self) -> PathBuf {
        self.config.paths.prediction_dir()
    }
}
