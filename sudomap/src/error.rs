//! Error types for the sudomap library.
//!
//! This module provides the error hierarchy for all operations in the
//! sudomap library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a sudomap error.
///
/// # Examples
///
/// ```
/// use sudomap::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sudomap library.
///
/// This enum encompasses all possible error conditions that can occur
/// while resolving an include graph.
///
/// Note that unreadable *nested* files and unlistable *nested* directories
/// are not errors: they are recorded as [`SkippedInclude`](crate::tree::SkippedInclude)
/// diagnostics on the tree and resolution proceeds. Only the entry file
/// itself failing to read aborts a resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// The entry file of a resolution could not be read.
    #[error("cannot read root file {}: {source}", path.display())]
    RootUnreadable {
        /// The entry file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates the entry file could not be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudomap::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::RootUnreadable {
    ///     path: PathBuf::from("/etc/sudoers"),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    /// };
    /// assert!(err.is_root_unreadable());
    /// ```
    #[must_use]
    pub fn is_root_unreadable(&self) -> bool {
        matches!(self, Self::RootUnreadable { .. })
    }

    /// Check if error indicates the entry file does not exist.
    ///
    /// Returns `false` for entry files that exist but are unreadable for
    /// other reasons (for example, permissions).
    #[must_use]
    pub fn is_root_not_found(&self) -> bool {
        matches!(
            self,
            Self::RootUnreadable { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
