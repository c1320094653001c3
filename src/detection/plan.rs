//! Build plan produced by a passing detection.
//!
//! The plan is handed to the build phase as a TOML attribute table:
//!
//! ```toml
//! [[provides]]
//! name = "gems"
//!
//! [[requires]]
//! name = "mri"
//!
//! [requires.metadata]
//! version = "3.2.1"
//! version-source = "Gemfile"
//! build = true
//! launch = true
//! ```

use serde::{Deserialize, Serialize};

use super::types::ResolvedVersion;
use crate::error::{DetectError, Result};

/// The installed gem bundle.
pub const GEMS_DEPENDENCY: &str = "gems";

/// The Bundler tool itself.
pub const BUNDLER_DEPENDENCY: &str = "bundler";

/// The MRI Ruby interpreter.
pub const MRI_DEPENDENCY: &str = "mri";

/// Capabilities provided and required by the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub provides: Vec<Provision>,
    pub requires: Vec<Requirement>,
}

/// A capability the source tree supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provision {
    pub name: String,
}

/// A capability the source tree needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    pub metadata: Metadata,
}

/// Metadata attached to a requirement.
///
/// An empty `version` means unconstrained and is still written out.
/// `version_source` is only ever set alongside a non-empty `version`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Metadata {
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_source: Option<String>,
    #[serde(default)]
    pub build: bool,
    #[serde(default)]
    pub launch: bool,
}

impl Metadata {
    /// Unversioned metadata with the given visibility.
    pub fn new(build: bool, launch: bool) -> Self {
        Self {
            version: String::new(),
            version_source: None,
            build,
            launch,
        }
    }

    /// Attach a resolved version and its source.
    pub fn with_version(mut self, resolved: Option<&ResolvedVersion>) -> Self {
        if let Some(resolved) = resolved {
            self.version = resolved.version.clone();
            self.version_source = Some(resolved.source.as_str().to_string());
        }
        self
    }
}

impl Requirement {
    pub fn new(name: &str, metadata: Metadata) -> Self {
        Self {
            name: name.to_string(),
            metadata,
        }
    }
}

impl BuildPlan {
    /// The plan for a Bundler-managed source tree.
    ///
    /// Provides `gems` and requires `bundler`, `gems` and `mri`, in that order.
    /// Only the `mri` entry carries a version.
    pub fn for_bundle(mri: Option<&ResolvedVersion>) -> Self {
        Self {
            provides: vec![Provision {
                name: GEMS_DEPENDENCY.to_string(),
            }],
            requires: vec![
                Requirement::new(BUNDLER_DEPENDENCY, Metadata::new(true, true)),
                Requirement::new(GEMS_DEPENDENCY, Metadata::new(false, true)),
                Requirement::new(MRI_DEPENDENCY, Metadata::new(true, true).with_version(mri)),
            ],
        }
    }

    /// Look up a requirement by name.
    pub fn requirement(&self, name: &str) -> Option<&Requirement> {
        self.requires.iter().find(|r| r.name == name)
    }

    /// Render the plan as a TOML attribute table.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| DetectError::PlanSerialize {
            message: e.to_string(),
        })
    }

    /// Render the plan as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DetectError::PlanSerialize {
            message: e.to_string(),
        })
    }
}
