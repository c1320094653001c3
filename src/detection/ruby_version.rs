//! `.ruby-version` pin file parsing.

use std::fs;
use std::path::Path;

use super::types::VersionParser;
use super::version::is_valid_version;
use crate::error::{DetectError, Result};

/// Reads the version pinned by a `.ruby-version` file.
///
/// The trimmed first line is the version. Version managers also accept a
/// `ruby-` prefix, which is stripped. Empty or malformed content yields an
/// empty version rather than an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct RubyVersionParser;

impl RubyVersionParser {
    pub fn new() -> Self {
        Self
    }

    /// Extract the pinned version from file content.
    pub fn parse_content(content: &str) -> String {
        let Some(line) = content
            .trim_start_matches('\u{feff}')
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
        else {
            return String::new();
        };

        let candidate = line.strip_prefix("ruby-").unwrap_or(line);
        if is_valid_version(candidate) {
            candidate.to_string()
        } else {
            String::new()
        }
    }
}

impl VersionParser for RubyVersionParser {
    fn parse_version(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| DetectError::from_read(path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        let version = Self::parse_content(&content);

        if version.is_empty() && !content.trim().is_empty() {
            tracing::debug!(
                "Ignoring malformed version in {}: {:?}",
                path.display(),
                content.trim()
            );
        }

        Ok(version)
    }
}
