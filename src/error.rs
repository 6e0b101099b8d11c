//! Error types for pmpref operations.
//!
//! This module defines [`PmError`], the error type returned by the mutating
//! parts of the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Reading signals never fails: a missing or malformed source is `None`
//! - Only the preference setters return errors
//! - `UnknownPackageManager` carries the valid set so callers can print it

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pmpref operations.
#[derive(Debug, Error)]
pub enum PmError {
    /// The identifier does not name a supported package manager.
    #[error("Unknown package manager \"{name}\" (available: {})", .valid.join(", "))]
    UnknownPackageManager {
        name: String,
        valid: Vec<&'static str>,
    },

    /// Failed to serialize a preference document.
    #[error("Failed to write preference to {path}: {message}")]
    Serialize { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PmError {
    /// Build an [`PmError::UnknownPackageManager`] listing every catalog identifier.
    pub fn unknown(name: &str) -> Self {
        Self::UnknownPackageManager {
            name: name.to_string(),
            valid: crate::catalog::PackageManager::identifiers(),
        }
    }
}

/// Result type alias for pmpref operations.
pub type Result<T> = std::result::Result<T, PmError>;
