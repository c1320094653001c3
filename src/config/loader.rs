//! Configuration file loading.
//!
//! Settings are layered: defaults, then an optional YAML file, then
//! environment/CLI overrides applied by the caller through
//! [`DetectConfig::with_overrides`].

use crate::config::schema::{DetectConfig, OutputFormat, PinFileResolution};
use crate::error::{DetectError, Result};
use std::fs;
use std::path::Path;

/// Load a single config file and parse it into DetectConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DetectConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DetectError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DetectError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into DetectConfig.
///
/// Blank content yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DetectConfig> {
    if content.trim().is_empty() {
        return Ok(DetectConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| DetectError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config from an optional file, falling back to defaults.
pub fn load_config(config_path: Option<&Path>) -> Result<DetectConfig> {
    match config_path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)
        }
        None => Ok(DetectConfig::default()),
    }
}

impl DetectConfig {
    /// Apply explicit overrides on top of loaded settings.
    pub fn with_overrides(
        mut self,
        pin_file_resolution: Option<PinFileResolution>,
        output_format: Option<OutputFormat>,
    ) -> Self {
        if let Some(resolution) = pin_file_resolution {
            self.pin_file_resolution = resolution;
        }
        if let Some(format) = output_format {
            self.output_format = format;
        }
        self
    }
}
