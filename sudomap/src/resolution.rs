//! Flattened resolution results.
//!
//! [`Resolution`] is the caller-facing summary of an include graph: the
//! set of files that participate in the configuration and the set of
//! directories that were referenced for expansion. Flattening is a pure
//! walk over an already-built tree; it performs no I/O and cannot fail.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::tree::ParsedFile;

/// The transitive closure of an include graph, as two duplicate-free sets.
///
/// A file reached through several independent inclusion chains appears in
/// the tree once per chain but collapses to a single entry here, which is
/// what makes cross-branch re-parsing harmless. Ordered sets keep output
/// and comparisons deterministic.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use sudomap::tree::ParsedFile;
/// use sudomap::Resolution;
///
/// let child = ParsedFile::new(PathBuf::from("/etc/sudoers.local"), 0, vec![], vec![]);
/// let root = ParsedFile::new(
///     PathBuf::from("/etc/sudoers"),
///     64,
///     vec![PathBuf::from("/etc/sudoers.d")],
///     vec![child],
/// );
///
/// let resolution = Resolution::from_tree(&root);
/// assert_eq!(resolution.files().len(), 2);
/// assert!(resolution.contains_file("/etc/sudoers.local"));
/// assert!(resolution.contains_directory("/etc/sudoers.d"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    files: BTreeSet<PathBuf>,
    directories: BTreeSet<PathBuf>,
}

impl Resolution {
    /// Flattens a parsed tree into its file and directory sets.
    ///
    /// Collects the path of every node (root included) and the union of
    /// every node's referenced include directories.
    #[must_use]
    pub fn from_tree(root: &ParsedFile) -> Self {
        let mut resolution = Self::default();
        root.visit(&mut |node| {
            resolution.files.insert(node.path().to_path_buf());
            for dir in node.include_dirs() {
                resolution.directories.insert(dir.clone());
            }
        });
        resolution
    }

    /// Returns every file that participates in the configuration, the
    /// root included.
    #[must_use]
    pub fn files(&self) -> &BTreeSet<PathBuf> {
        &self.files
    }

    /// Returns every directory referenced by an `#includedir` directive.
    ///
    /// Directories that could not be listed are still present; being
    /// referenced is an attribute of the configuration text, not of the
    /// current filesystem state.
    #[must_use]
    pub fn directories(&self) -> &BTreeSet<PathBuf> {
        &self.directories
    }

    /// Returns true if `path` is one of the resolved files.
    #[must_use]
    pub fn contains_file(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains(path.as_ref())
    }

    /// Returns true if `path` is one of the referenced directories.
    #[must_use]
    pub fn contains_directory(&self, path: impl AsRef<Path>) -> bool {
        self.directories.contains(path.as_ref())
    }
}
