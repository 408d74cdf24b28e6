//! Lexical path normalization and anchoring.
//!
//! This module provides functionality to:
//! - Anchor include references against the directory of the including file
//! - Resolve `.` and `..` components without touching the filesystem
//! - Expand tilde (~) to the home directory
//! - Convert relative paths to absolute paths
//!
//! All functions here are purely lexical: symlinks are never followed, so
//! the same textual reference always maps to the same destination path.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use sudomap::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// // Expands ~ to home directory
/// let expanded = expand_tilde(Path::new("~")).unwrap();
/// assert!(expanded.is_absolute());
///
/// // Expands ~/path to home/path
/// let expanded = expand_tilde(Path::new("~/sudoers")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("sudoers"));
///
/// // Leaves absolute paths unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    // Get home directory using the home crate
    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        // ~user syntax not supported
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components lexically.
///
/// This function processes path components to remove current directory (`.`)
/// references and collapse parent directory (`..`) references. It never
/// fails: `..` at the root of an absolute path is dropped (the root is its
/// own parent, as in POSIX path traversal), and a leading `..` on a rootless
/// path is kept so that resolving is idempotent.
///
/// # Examples
///
/// ```
/// use sudomap::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// // Resolves . and ..
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// // .. at the root is clamped rather than rejected
/// let resolved = resolve_components(Path::new("/../etc/sudoers"));
/// assert_eq!(resolved, PathBuf::from("/etc/sudoers"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {
                // Skip "." - it doesn't change the path
            }
            Component::ParentDir => {
                if matches!(result.components().next_back(), Some(Component::Normal(_))) {
                    result.pop();
                } else if !has_root {
                    // Rootless path with nothing left to pop: the leading
                    // ".." has to survive or resolving would not be stable.
                    result.push(component);
                }
                // At the root ".." is dropped.
            }
        }
    }

    // Ensure we at least have a root if we started with one
    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    result
}

/// Anchor an include reference against the including file's directory.
///
/// References taken from `#include` and `#includedir` directives may be
/// absolute or relative. Absolute references are used as written; relative
/// references attach to `base`, the directory containing the file the
/// directive appeared in. Either way the result has its `.` and `..`
/// components collapsed.
///
/// The operation is purely lexical and infallible, so a malformed reference
/// can never abort a resolution; at worst it names a path that later fails
/// to read.
///
/// # Examples
///
/// ```
/// use sudomap::path::normalize::anchor;
/// use std::path::{Path, PathBuf};
///
/// // Relative references attach to the including file's directory
/// let dest = anchor(Path::new("sudoers.local"), Path::new("/etc"));
/// assert_eq!(dest, PathBuf::from("/etc/sudoers.local"));
///
/// // Absolute references stand on their own
/// let dest = anchor(Path::new("/etc/sudoers.d/10-net"), Path::new("/srv"));
/// assert_eq!(dest, PathBuf::from("/etc/sudoers.d/10-net"));
///
/// // . and .. are collapsed lexically
/// let dest = anchor(Path::new("../local/extra"), Path::new("/etc/sudoers.d"));
/// assert_eq!(dest, PathBuf::from("/etc/local/extra"));
/// ```
#[must_use]
pub fn anchor(reference: &Path, base: &Path) -> PathBuf {
    if reference.is_absolute() {
        resolve_components(reference)
    } else {
        resolve_components(&base.join(reference))
    }
}

/// Normalize a path to absolute form.
///
/// This is the entry-point normalization applied to user-supplied root
/// paths:
/// 1. Expands tilde (~) if present
/// 2. Converts relative paths to absolute (using current directory)
/// 3. Resolves `.` and `..` components
///
/// # Errors
///
/// Returns an error if:
/// - Tilde expansion fails
/// - Current directory cannot be determined
/// - Path is invalid for the platform
///
/// # Examples
///
/// ```no_run
/// use sudomap::path::normalize::normalize;
/// use std::path::Path;
///
/// // Normalize tilde path
/// let normalized = normalize(Path::new("~/sudoers")).unwrap();
/// assert!(normalized.is_absolute());
///
/// // Normalize relative path
/// let normalized = normalize(Path::new("./etc/sudoers")).unwrap();
/// assert!(normalized.is_absolute());
///
/// // Resolve . and ..
/// let normalized = normalize(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(normalized, Path::new("/a/c"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    // First expand tilde if present
    let expanded = expand_tilde(path)?;

    // Make absolute if not already
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    // Resolve . and .. components
    Ok(resolve_components(&absolute))
}
