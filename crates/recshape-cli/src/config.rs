//! # CLI Configuration
//!
//! Optional YAML file supplying defaults for global flags:
//!
//! ```yaml
//! format: json       # text | json
//! log_level: info    # EnvFilter directive
//! ```
//!
//! Command-line flags take precedence over file values.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document.
    Json,
}

/// Contents of a `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Default output format.
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// Default tracing filter when no `-v` flag is given.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Load a config file.
    ///
    /// An empty file yields the default config.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(flag_format: Option<OutputFormat>, config: &CliConfig) -> Self {
        Self {
            format: flag_format.or(config.format).unwrap_or_default(),
        }
    }
}

/// Tracing filter for the given verbosity count.
///
/// `-v` and above always win. Otherwise the config's `log_level` applies,
/// then `RUST_LOG`, falling back to `warn`.
///
/// # Errors
///
/// Returns an error if the config's `log_level` is not a valid `EnvFilter`
/// directive.
pub fn log_filter(verbose: u8, config: &CliConfig) -> Result<EnvFilter> {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    if let Some(level) = level {
        return Ok(EnvFilter::new(level));
    }
    match &config.log_level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log_level {directive:?} in config file")),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))),
    }
}
