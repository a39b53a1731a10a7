//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Default file paths
    #[serde(default)]
    pub files: FilesConfig,
}

/// Default input and output paths, both overridable from the command line
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct FilesConfig {
    /// Input file read when --input is not given
    pub input: Option<PathBuf>,

    /// Output file written when --output is not given
    pub output: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// Commented template written by the generate-config command
    pub fn template() -> &'static str {
        r#"# duanju configuration
#
# Both paths are optional; command-line flags take precedence.

[files]
# input = "notes.txt"
# output = "formatted.txt"
"#
    }
}
