//! Version parser trait and resolution types.

use std::fmt;
use std::path::Path;

use crate::error::Result;

/// File name of the dependency manifest.
pub const GEMFILE: &str = "Gemfile";

/// File name of the Ruby version pin file.
pub const RUBY_VERSION_FILE: &str = ".ruby-version";

/// Trait for extracting a Ruby version from a file.
///
/// An empty string is a valid result and means the file expresses no
/// version constraint. A missing file must be reported as
/// [`DetectError::FileNotFound`](crate::DetectError::FileNotFound).
pub trait VersionParser {
    /// Parse the version expressed by the file at `path`.
    fn parse_version(&self, path: &Path) -> Result<String>;
}

impl<P: VersionParser + ?Sized> VersionParser for &P {
    fn parse_version(&self, path: &Path) -> Result<String> {
        (**self).parse_version(path)
    }
}

impl<P: VersionParser + ?Sized> VersionParser for Box<P> {
    fn parse_version(&self, path: &Path) -> Result<String> {
        (**self).parse_version(path)
    }
}

/// Which file a resolved version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// The `ruby` directive of the Gemfile.
    Gemfile,
    /// The `.ruby-version` pin file.
    RubyVersionFile,
}

impl VersionSource {
    /// The file name recorded as `version-source` in the build plan.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemfile => GEMFILE,
            Self::RubyVersionFile => RUBY_VERSION_FILE,
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty version together with the file that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub version: String,
    pub source: VersionSource,
}

impl ResolvedVersion {
    /// Pair a parsed version with its source.
    ///
    /// Returns `None` for an empty version, so an unconstrained result never
    /// carries a source.
    pub fn new(version: String, source: VersionSource) -> Option<Self> {
        if version.is_empty() {
            None
        } else {
            Some(Self { version, source })
        }
    }
}
