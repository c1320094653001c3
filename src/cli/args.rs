//! CLI argument definitions.
//!
//! The positional arguments follow the buildpack detect invocation:
//! `detect <PLATFORM_DIR> <PLAN_PATH>`, run from the application directory.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{OutputFormat, PinFileResolution};

/// Decide whether a source tree builds with Ruby and Bundler.
#[derive(Debug, Parser)]
#[command(name = "bundle-detect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Platform directory (accepted for compatibility, not read)
    pub platform_dir: Option<PathBuf>,

    /// Where to write the build plan (printed to stdout when omitted)
    pub plan_path: Option<PathBuf>,

    /// Where to write the build plan (same as PLAN_PATH)
    #[arg(long, conflicts_with = "plan_path")]
    pub plan: Option<PathBuf>,

    /// Application source directory (overrides current directory)
    #[arg(short, long, env = "BUNDLE_DETECT_WORKING_DIR")]
    pub working_dir: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(short, long, env = "BUNDLE_DETECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to look for .ruby-version: process or working-dir
    #[arg(long, env = "BUNDLE_DETECT_PIN_FILE_RESOLUTION")]
    pub pin_file_resolution: Option<PinFileResolution>,

    /// Build plan format: toml or json
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Destination of the build plan, from either the positional or `--plan`.
    pub fn plan_destination(&self) -> Option<&Path> {
        self.plan.as_deref().or(self.plan_path.as_deref())
    }
}
