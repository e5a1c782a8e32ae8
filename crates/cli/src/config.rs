//! Shell configuration via `uniag.toml`
//!
//! The file is optional and only ever read. Without `--config`, a
//! `uniag.toml` in the working directory is used when present; otherwise
//! every setting takes its default.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::format::OutputMode;

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "uniag.toml";

/// Shell configuration loaded from `uniag.toml`.
///
/// # Example
///
/// ```toml
/// seed_sample_data = false
/// currency_symbol = "EUR"
/// output = "json"
/// log_filter = "uniag=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Load the sample members and projects at start-up.
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,
    /// Suffix used when printing amounts.
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
    /// Output mode when neither `--json` nor `--raw` is given.
    #[serde(default)]
    pub output: OutputMode,
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_seed() -> bool {
    true
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed(),
            currency_symbol: default_currency(),
            output: OutputMode::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl CliConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# UNIAG shell configuration
#
# Load the sample members and projects at start-up (default: true)
seed_sample_data = true

# Currency suffix for funding and balances (default: "€")
currency_symbol = "€"

# Output mode for command results: "human", "json" or "raw" (default: "human")
output = "human"

# Log filter used when RUST_LOG is unset (default: "warn")
# e.g. "uniag=debug" to trace every command
log_filter = "warn"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, including an
    /// unknown `output` value.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise `dir/uniag.toml` is read when
    /// present and defaults are used when it is not.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let fallback = dir.join(CONFIG_FILE_NAME);
        if fallback.is_file() {
            Self::from_file(&fallback)
        } else {
            Ok(Self::default())
        }
    }
}
