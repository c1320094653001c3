//! Error types for detection.
//!
//! This module defines [`DetectError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing file is reported as [`DetectError::FileNotFound`] so callers can
//!   branch on it with [`DetectError::is_not_found`] instead of inspecting text
//! - Any other read failure is [`DetectError::ReadFailed`] and aborts detection
//! - Use `anyhow::Error` (via `DetectError::Other`) for unexpected errors

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Core error type for detection.
#[derive(Debug, Error)]
pub enum DetectError {
    /// A file the detector looked for does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The build plan could not be rendered.
    #[error("Failed to serialize build plan: {message}")]
    PlanSerialize { message: String },

    /// The build plan could not be written to its destination.
    #[error("Failed to write build plan to {path}: {source}")]
    PlanWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DetectError {
    /// Classify an I/O error raised while reading `path`.
    ///
    /// `NotFound` becomes [`DetectError::FileNotFound`]; everything else is
    /// [`DetectError::ReadFailed`].
    pub fn from_read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Whether this error means the file was absent.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::FileNotFound { .. } => true,
            Self::Io(err) => err.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Result type alias for detection operations.
pub type Result<T> = std::result::Result<T, DetectError>;
