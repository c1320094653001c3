//! Gemfile `ruby` directive parsing.
//!
//! Bundler lets a Gemfile pin the interpreter anywhere in the document:
//!
//! ```ruby
//! source "https://rubygems.org"
//! ruby "~> 3.2.0"
//! gem "rails"
//! ```
//!
//! [`GemfileParser`] returns the first such directive, keeping the
//! constraint operator when one is present.

use std::fs;
use std::path::Path;

use regex::Regex;
use std::sync::LazyLock;

use super::types::VersionParser;
use super::version::{lazy_regex, VERSION_PATTERN};
use crate::error::{DetectError, Result};

lazy_regex!(
    RE_RUBY_DIRECTIVE,
    &format!(
        r#"^\s*ruby\s*\(?\s*["'](?:(?P<op>~>|>=|<=|>|<|=)\s*)?(?P<version>{})["']"#,
        VERSION_PATTERN
    )
);

/// Extracts the Ruby version constraint from a Gemfile.
#[derive(Debug, Default, Clone, Copy)]
pub struct GemfileParser;

impl GemfileParser {
    pub fn new() -> Self {
        Self
    }

    /// Find the `ruby` directive in Gemfile content.
    ///
    /// Returns an empty string when the Gemfile does not constrain the
    /// interpreter.
    pub fn parse_content(content: &str) -> String {
        content
            .trim_start_matches('\u{feff}')
            .lines()
            .find_map(|line| RE_RUBY_DIRECTIVE.captures(line))
            .map(|caps| {
                let version = &caps["version"];
                match caps.name("op") {
                    Some(op) => format!("{} {}", op.as_str(), version),
                    None => version.to_string(),
                }
            })
            .unwrap_or_default()
    }
}

impl VersionParser for GemfileParser {
    fn parse_version(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| DetectError::from_read(path, e))?;
        let version = Self::parse_content(&String::from_utf8_lossy(&bytes));

        tracing::debug!("Parsed {} ruby directive: {:?}", path.display(), version);

        Ok(version)
    }
}
