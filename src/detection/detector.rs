//! Gemfile detection and Ruby version resolution.

use std::path::Path;

use super::plan::BuildPlan;
use super::types::{ResolvedVersion, VersionParser, VersionSource, GEMFILE};
use crate::config::PinFileResolution;
use crate::error::Result;
use crate::ui::UserInterface;

/// Reason reported when the source tree has no Gemfile.
pub const GEMFILE_MISSING: &str = "Gemfile is not present";

/// Warning emitted when the pin file cannot be read.
pub const RUBY_VERSION_FILE_WARNING: &str =
    "WARNING: Could not parse the .ruby-version file, as a result no Ruby version has been specified";

/// Result of a detection run that did not hit a hard error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectOutcome {
    /// The source tree builds with Bundler.
    Pass(BuildPlan),
    /// The source tree is not a Bundler project.
    Fail(String),
}

impl DetectOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass(_))
    }

    /// The plan, if detection passed.
    pub fn plan(&self) -> Option<&BuildPlan> {
        match self {
            Self::Pass(plan) => Some(plan),
            Self::Fail(_) => None,
        }
    }
}

/// Decides whether a source tree is a Bundler project.
///
/// The Ruby version comes from the Gemfile's `ruby` directive; the
/// `.ruby-version` pin file is only read when the Gemfile has none.
pub struct Detector<G, R> {
    gemfile_parser: G,
    ruby_version_parser: R,
    pin_file_resolution: PinFileResolution,
}

impl<G: VersionParser, R: VersionParser> Detector<G, R> {
    /// Create a detector that reads the pin file relative to the process's
    /// current directory.
    pub fn new(gemfile_parser: G, ruby_version_parser: R) -> Self {
        Self {
            gemfile_parser,
            ruby_version_parser,
            pin_file_resolution: PinFileResolution::default(),
        }
    }

    /// Set where the pin file is looked up.
    pub fn with_pin_file_resolution(mut self, resolution: PinFileResolution) -> Self {
        self.pin_file_resolution = resolution;
        self
    }

    /// Run detection against `working_dir`.
    ///
    /// A missing Gemfile is a [`DetectOutcome::Fail`]. Any other Gemfile
    /// error is returned as `Err`. Pin file errors only produce a warning.
    pub fn detect(
        &self,
        working_dir: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<DetectOutcome> {
        let gemfile = working_dir.join(GEMFILE);
        let gemfile_version = match self.gemfile_parser.parse_version(&gemfile) {
            Ok(version) => version,
            Err(e) if e.is_not_found() => {
                tracing::debug!("No Gemfile at {}", gemfile.display());
                return Ok(DetectOutcome::Fail(GEMFILE_MISSING.to_string()));
            }
            Err(e) => return Err(e),
        };

        let mri = match ResolvedVersion::new(gemfile_version, VersionSource::Gemfile) {
            Some(resolved) => Some(resolved),
            None => self.pin_file_version(working_dir, ui),
        };

        match &mri {
            Some(resolved) => tracing::debug!(
                "Requiring mri {} from {}",
                resolved.version,
                resolved.source
            ),
            None => tracing::debug!("Requiring mri without a version constraint"),
        }

        Ok(DetectOutcome::Pass(BuildPlan::for_bundle(mri.as_ref())))
    }

    fn pin_file_version(
        &self,
        working_dir: &Path,
        ui: &mut dyn UserInterface,
    ) -> Option<ResolvedVersion> {
        let path = self.pin_file_resolution.pin_file_path(working_dir);
        match self.ruby_version_parser.parse_version(&path) {
            Ok(version) => ResolvedVersion::new(version, VersionSource::RubyVersionFile),
            Err(e) => {
                tracing::debug!("Pin file unusable: {}", e);
                ui.warning(RUBY_VERSION_FILE_WARNING);
                None
            }
        }
    }
}
