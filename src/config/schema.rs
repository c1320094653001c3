//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::detection::RUBY_VERSION_FILE;

/// Detection settings.
///
/// Every field has a default, so an empty config file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectConfig {
    /// Where the `.ruby-version` pin file is looked up.
    pub pin_file_resolution: PinFileResolution,

    /// How the build plan is rendered.
    pub output_format: OutputFormat,
}

/// Base directory for the `.ruby-version` lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PinFileResolution {
    /// Bare relative name, resolved against the process's current directory.
    #[default]
    Process,
    /// Joined onto the application working directory, like the Gemfile.
    WorkingDir,
}

impl PinFileResolution {
    /// Path at which the pin file is read for `working_dir`.
    pub fn pin_file_path(&self, working_dir: &Path) -> PathBuf {
        match self {
            Self::Process => PathBuf::from(RUBY_VERSION_FILE),
            Self::WorkingDir => working_dir.join(RUBY_VERSION_FILE),
        }
    }
}

impl FromStr for PinFileResolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "process" => Ok(Self::Process),
            "working-dir" | "working_dir" => Ok(Self::WorkingDir),
            _ => Err(format!("unknown pin file resolution: {}", s)),
        }
    }
}

/// Build plan rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}
