//! Configuration management for scoring runs.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Default values (the competition container layout under `/app/`)
//! 2. `config/default.toml` (if it exists)
//! 3. `config/{SCORER_ENV}.toml` (if `SCORER_ENV` is set and the file exists)
//! 4. An explicit file passed with `--config`
//! 5. Environment variables prefixed with `SCORER_`
//!
//! ## Example Configuration
//!
//! ```toml
//! [paths]
//! root_dir = "/app/"
//! score_file = "scores.json"
//!
//! [spans]
//! exclusive_index = true
//!
//! [correction]
//! resources_dir = "/app/program"
//!
//! [telemetry]
//! log_level = "info"
//! json_logging = false
//! ```

use anyhow::{Context, Result};
use citation_eval_domain::IndexConvention;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main scorer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub spans: SpanConfig,
    #[serde(default)]
    pub correction: CorrectionConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Input and output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root of the evaluation container
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Reference directory (defaults to `<root>/input/ref`)
    #[serde(default)]
    pub reference_dir: Option<PathBuf>,

    /// Prediction directory (defaults to `<root>/input/res`)
    #[serde(default)]
    pub prediction_dir: Option<PathBuf>,

    /// Score output directory (defaults to `<root>/output`)
    #[serde(default)]
    pub score_dir: Option<PathBuf>,

    /// File name of the score report inside the score directory
    #[serde(default = "default_score_file")]
    pub score_file: String,
}

/// Span scoring options (Subtask 1A)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanConfig {
    /// `true` when prediction span ends are exclusive, `false` when inclusive
    #[serde(default = "default_exclusive_index")]
    pub exclusive_index: bool,
}

/// Correction scoring options (Subtask 1C)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Directory holding the Quran and Hadith corpora (defaults to the
    /// directory of the running executable)
    #[serde(default)]
    pub resources_dir: Option<PathBuf>,

    #[serde(default = "default_quran_file")]
    pub quran_file: String,

    #[serde(default = "default_hadith_file")]
    pub hadith_file: String,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,
}

// Default value functions
fn default_root_dir() -> PathBuf {
    PathBuf::from("/app/")
}

fn default_score_file() -> String {
    "scores.json".to_string()
}

fn default_exclusive_index() -> bool {
    true
}

fn default_quran_file() -> String {
    "quranic_verses.json".to_string()
}

fn default_hadith_file() -> String {
    "six_hadith_books.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            reference_dir: None,
            prediction_dir: None,
            score_dir: None,
            score_file: default_score_file(),
        }
    }
}

impl Default for SpanConfig {
    fn default() -> Self {
        Self {
            exclusive_index: default_exclusive_index(),
        }
    }
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            resources_dir: None,
            quran_file: default_quran_file(),
            hadith_file: default_hadith_file(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: false,
        }
    }
}

impl PathsConfig {
    pub fn reference_dir(&self) -> PathBuf {
        self.reference_dir
            .clone()
            .unwrap_or_else(|| self.root_dir.join("input").join("ref"))
    }

    pub fn prediction_dir(&self) -> PathBuf {
        self.prediction_dir
            .clone()
            .unwrap_or_else(|| self.root_dir.join("input").join("res"))
    }

    pub fn score_dir(&self) -> PathBuf {
        self.score_dir
            .clone()
            .unwrap_or_else(|| self.root_dir.join("output"))
    }
}

impl SpanConfig {
    pub fn convention(&self) -> IndexConvention {
        IndexConvention::from_exclusive_flag(self.exclusive_index)
    }
}

impl CorrectionConfig {
    /// Resolve the resources directory, falling back to the executable's
    /// directory and then to the working directory.
    pub fn resources_dir(&self) -> PathBuf {
        if let Some(dir) = &self.resources_dir {
            return dir.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn quran_path(&self) -> PathBuf {
        self.resources_dir().join(&self.quran_file)
    }

    pub fn hadith_path(&self) -> PathBuf {
        self.resources_dir().join(&self.hadith_file)
    }
}

/// Reject empty names and names that would leave the score directory
pub fn validate_file_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("{} name is required", kind);
    }

    if name.contains(['/', '\\']) || name == "." || name == ".." {
        anyhow::bail!(
            "{} name '{}' must be a plain file name; set paths.score_dir instead",
            kind,
            name
        );
    }

    Ok(())
}

impl ScorerConfig {
    /// Load configuration from files and environment variables.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use citation_eval_common::config::ScorerConfig;
    ///
    /// let config = ScorerConfig::load(None).expect("Failed to load configuration");
    /// println!("Reading references from {}", config.paths.reference_dir().display());
    /// ```
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            // Start with default configuration file
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific configuration
        if let Ok(env) = std::env::var("SCORER_ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        // Add environment variables (prefix: SCORER_)
        // Example: SCORER_SPANS__EXCLUSIVE_INDEX=false
        let config = builder
            .add_source(
                config::Environment::with_prefix("SCORER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let scorer_config: ScorerConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        scorer_config.validate()?;

        Ok(scorer_config)
    }

    /// Defaults with every directory placed under `root`
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            paths: PathsConfig {
                root_dir: root.into(),
                ..PathsConfig::default()
            },
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.paths.root_dir.as_os_str().is_empty() {
            anyhow::bail!("Root directory must not be empty");
        }

        validate_file_name("Score file", &self.paths.score_file)?;

        if self.correction.quran_file.is_empty() || self.correction.hadith_file.is_empty() {
            anyhow::bail!("Quran and Hadith corpus file names are required");
        }

        // Validate telemetry config
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                valid_log_levels.join(", ")
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_layout() {
        let config = ScorerConfig::default();
        assert_eq!(config.paths.reference_dir(), PathBuf::from("/app/input/ref"));
        assert_eq!(config.paths.prediction_dir(), PathBuf::from("/app/input/res"));
        assert_eq!(config.paths.score_dir(), PathBuf::from("/app/output"));
        assert_eq!(config.paths.score_file, "scores.json");
        assert_eq!(config.spans.convention(), IndexConvention::Exclusive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_dirs_override_root() {
        let mut config = ScorerConfig::rooted_at("/tmp/run");
        config.paths.prediction_dir = Some(PathBuf::from("/submissions/team-7"));

        assert_eq!(config.paths.reference_dir(), PathBuf::from("/tmp/run/input/ref"));
        assert_eq!(config.paths.prediction_dir(), PathBuf::from("/submissions/team-7"));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = ScorerConfig::default();
        config.telemetry.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_score_file_with_separator_rejected() {
        let mut config = ScorerConfig::default();
        config.paths.score_file = "out/scores.json".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("Details file", "question_scores.json").is_ok());
        assert!(validate_file_name("Details file", "").is_err());
        assert!(validate_file_name("Details file", "../scores.json").is_err());
        assert!(validate_file_name("Details file", "..").is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[paths]\nroot_dir = \"/data\"\n\n[spans]\nexclusive_index = false\n\n[telemetry]\nlog_level = \"debug\""
        )
        .unwrap();

        let config = ScorerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.paths.root_dir, PathBuf::from("/data"));
        assert_eq!(config.spans.convention(), IndexConvention::Inclusive);
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.paths.score_file, "scores.json");
    }

    #[test]
    fn test_load_rejects_bad_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[telemetry]\nlog_level = \"loud\"").unwrap();

        assert!(ScorerConfig::load(Some(file.path())).is_err());
    }
}
