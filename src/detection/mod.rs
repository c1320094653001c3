//! Bundler project detection.
//!
//! - [`types`] - The [`VersionParser`] trait and version provenance
//! - [`gemfile`] / [`ruby_version`] - The two parser implementations
//! - [`detector`] - Version precedence and the pass/fail decision
//! - [`plan`] - The build plan handed to the build phase

pub mod detector;
pub mod gemfile;
pub mod plan;
pub mod ruby_version;
pub mod types;
mod version;

pub use detector::{DetectOutcome, Detector, GEMFILE_MISSING, RUBY_VERSION_FILE_WARNING};
pub use gemfile::GemfileParser;
pub use plan::{BuildPlan, Metadata, Provision, Requirement};
pub use ruby_version::RubyVersionParser;
pub use types::{ResolvedVersion, VersionParser, VersionSource, GEMFILE, RUBY_VERSION_FILE};
pub use version::is_valid_version;

use std::path::Path;

use crate::config::DetectConfig;
use crate::error::Result;
use crate::ui::UserInterface;

/// Run detection with the Gemfile and `.ruby-version` parsers.
pub fn detect(
    working_dir: &Path,
    config: &DetectConfig,
    ui: &mut dyn UserInterface,
) -> Result<DetectOutcome> {
    Detector::new(GemfileParser::new(), RubyVersionParser::new())
        .with_pin_file_resolution(config.pin_file_resolution)
        .detect(working_dir, ui)
}
