//! Detection configuration.
//!
//! - Schema definitions in [`schema`]
//! - File loading and override layering in [`loader`]
//!
//! # Example
//!
//! ```
//! use bundle_detect::config::{parse_config, PinFileResolution};
//! use std::path::Path;
//!
//! let config = parse_config("pin_file_resolution: working-dir", Path::new("detect.yml")).unwrap();
//! assert_eq!(config.pin_file_resolution, PinFileResolution::WorkingDir);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::{DetectConfig, OutputFormat, PinFileResolution};
