//! Common utilities shared by the scoring crates.
//!
//! This crate provides:
//! - Configuration management (layered files + environment)
//! - Telemetry and structured logging

pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use config::{
    validate_file_name, CorrectionConfig, PathsConfig, ScorerConfig, SpanConfig, TelemetryConfig,
};
pub use telemetry::{init_from_config, init_tracing};
