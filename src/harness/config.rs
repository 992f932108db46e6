use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Column width the quoted sample is padded to in text reports
pub const DEFAULT_SAMPLE_WIDTH: usize = 30;
/// Prefix for environment overrides, e.g. `DATA_EXTRACTION_FORMAT=json`
pub const ENV_PREFIX: &str = "DATA_EXTRACTION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for the report harness
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HarnessConfig {
    /// How reports are written to stdout
    pub format: OutputFormat,

    /// Padding applied to the quoted sample in text output
    pub sample_width: usize,

    /// Write logs to a timestamped file here instead of stderr
    pub log_dir: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            sample_width: DEFAULT_SAMPLE_WIDTH,
            log_dir: None,
        }
    }
}

impl HarnessConfig {
    /// Layers defaults, then the optional file, then `DATA_EXTRACTION_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("format", "text")?
            .set_default("sample_width", DEFAULT_SAMPLE_WIDTH as u64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to load configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }
}
