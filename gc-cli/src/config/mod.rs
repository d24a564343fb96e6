//! Configuration module

use crate::error::CliError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// When to print filename headers
    pub headers: HeaderMode,

    /// Render headers in bold
    pub bold: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            headers: HeaderMode::Auto,
            bold: true,
        }
    }
}

/// When filename headers are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Only when stdout is a terminal and more than one file is given
    #[default]
    Auto,
    /// Always, regardless of the number of files
    Always,
    /// Never
    Never,
}

impl HeaderMode {
    /// Decide whether headers are printed for this invocation
    pub fn enabled(self, target_count: usize, stdout_is_terminal: bool) -> bool {
        match self {
            HeaderMode::Auto => stdout_is_terminal && target_count > 1,
            HeaderMode::Always => true,
            HeaderMode::Never => false,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration from `path`, or the defaults when there is none
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|err| CliError::Config {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        Self::from_toml_str(&text).map_err(|err| CliError::Config {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
    }
}
