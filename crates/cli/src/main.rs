//! Citation Eval CLI
//!
//! Scores shared-task submissions on Arabic religious citations: span
//! detection (1A), citation classification (1B) and citation correction (1C).

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use citation_eval_cli::commands::{self, spans::SpanArgs, CommandContext};
use citation_eval_cli::output::OutputFormat;
use citation_eval_common::{init_from_config, ScorerConfig};
use citation_eval_domain::ScoringError;

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "citation-eval")]
#[command(author, version, about = "Scorer for the Arabic religious citation shared task")]
#[command(long_about = "Scores a participant submission against the hidden reference files.\n\n\
    Inputs are read from <root>/input/ref and <root>/input/res, and the score report is \
    written to <root>/output/scores.json.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format of the printed report
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table")]
    format: CliOutputFormat,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "CITATION_EVAL_CONFIG")]
    config: Option<PathBuf>,

    /// Root of the evaluation layout (overrides config)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Reference directory (overrides config and --root)
    #[arg(long, global = true)]
    reference_dir: Option<PathBuf>,

    /// Prediction directory (overrides config and --root)
    #[arg(long, global = true)]
    prediction_dir: Option<PathBuf>,

    /// Score output directory (overrides config and --root)
    #[arg(long, global = true)]
    score_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score citation span detection (Subtask 1A)
    #[command(alias = "1a")]
    Spans {
        /// Prediction span ends are inclusive
        #[arg(long)]
        inclusive: bool,

        /// Print per-question outcomes
        #[arg(short, long)]
        breakdown: bool,

        /// Also write the per-question summary to this file in the score directory
        #[arg(long)]
        details_file: Option<String>,
    },

    /// Score citation classification (Subtask 1B)
    #[command(alias = "1b")]
    Classification,

    /// Score citation correction (Subtask 1C)
    #[command(alias = "1c")]
    Correction {
        /// Directory holding the Quran and Hadith corpora (overrides config)
        #[arg(long)]
        resources_dir: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "citation-eval", &mut std::io::stdout());
}

/// Layer the command-line overrides on top of the loaded configuration
fn build_config(cli: &Cli) -> Result<ScorerConfig> {
    let mut config = ScorerConfig::load(cli.config.as_deref())?;

    if let Some(root) = &cli.root {
        config.paths.root_dir = root.clone();
    }
    if let Some(dir) = &cli.reference_dir {
        config.paths.reference_dir = Some(dir.clone());
    }
    if let Some(dir) = &cli.prediction_dir {
        config.paths.prediction_dir = Some(dir.clone());
    }
    if let Some(dir) = &cli.score_dir {
        config.paths.score_dir = Some(dir.clone());
    }
    if let Commands::Correction {
        resources_dir: Some(dir),
    } = &cli.command
    {
        config.correction.resources_dir = Some(dir.clone());
    }
    if cli.verbose {
        config.telemetry.log_level = "debug".to_string();
    }
    if cli.log_json {
        config.telemetry.json_logging = true;
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    init_from_config(&config.telemetry)?;

    let mut ctx = CommandContext::new(config, cli.format.into());
    if cli.quiet {
        ctx = ctx.quiet();
    }

    match cli.command {
        Commands::Spans {
            inclusive,
            breakdown,
            details_file,
        } => {
            let args = SpanArgs {
                inclusive,
                breakdown,
                details_file,
            };
            commands::spans::run(&ctx, &args).map(|_| ())
        }
        Commands::Classification => commands::classification::run(&ctx).map(|_| ()),
        Commands::Correction { .. } => commands::correction::run(&ctx).map(|_| ()),
        Commands::Completions { .. } => Ok(()),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Handle completions command early (doesn't need config)
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let verbose = cli.verbose;
    let result = run(cli);

    // Handle errors
    if let Err(e) = result {
        use colored::Colorize;
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        if verbose {
            if let Some(scoring) = e.downcast_ref::<ScoringError>() {
                eprintln!("{} {}", "Code:".dimmed(), scoring.error_code());
            }
            eprintln!("\n{}", "Backtrace:".dimmed());
            eprintln!("{:?}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}
