//! bundle-detect - Detect phase for Ruby/Bundler source trees.
//!
//! Decides whether an application should be built with Bundler and, if so,
//! which Ruby version it requires, producing a build plan for the build phase.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`detection`] - Version parsing, precedence and the build plan
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Warning and status output
//!
//! # Example
//!
//! ```
//! use bundle_detect::config::{DetectConfig, PinFileResolution};
//! use bundle_detect::detection::detect;
//! use bundle_detect::ui::MockUI;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("Gemfile"), "ruby '3.2.1'\n").unwrap();
//!
//! let config = DetectConfig {
//!     pin_file_resolution: PinFileResolution::WorkingDir,
//!     ..Default::default()
//! };
//! let outcome = detect(temp.path(), &config, &mut MockUI::new()).unwrap();
//! let mri = outcome.plan().unwrap().requirement("mri").unwrap();
//! assert_eq!(mri.metadata.version, "3.2.1");
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod ui;

pub use error::{DetectError, Result};
