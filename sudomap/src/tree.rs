//! Parsed include tree types.
//!
//! A resolution produces a tree of [`ParsedFile`] nodes, one per
//! successfully read configuration file, wrapped in an [`IncludeTree`]
//! together with the diagnostics for every reference that was dropped
//! along the way. The tree is built once per resolution and flattened
//! into result sets; it is not a persisted structure.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// One successfully read configuration file.
///
/// The node records where the file lives, how much content it had, which
/// directories its `#includedir` directives named, and the files it pulled
/// in (directly via `#include`, or indirectly via directory expansion) as
/// child nodes. A node exclusively owns its children; cycle prevention
/// keeps the tree finite and acyclic by construction.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use sudomap::tree::ParsedFile;
///
/// let leaf = ParsedFile::new(PathBuf::from("/etc/sudoers.local"), 42, vec![], vec![]);
/// let root = ParsedFile::new(
///     PathBuf::from("/etc/sudoers"),
///     120,
///     vec![PathBuf::from("/etc/sudoers.d")],
///     vec![leaf],
/// );
///
/// assert_eq!(root.dir(), PathBuf::from("/etc").as_path());
/// assert_eq!(root.children().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedFile {
    path: PathBuf,
    dir: PathBuf,
    content_len: usize,
    include_dirs: Vec<PathBuf>,
    children: Vec<ParsedFile>,
}

impl ParsedFile {
    /// Creates a node for a file at `path`.
    ///
    /// The containing directory is derived from `path`, which is expected
    /// to be absolute and normalized (the resolver guarantees this for
    /// every node it constructs).
    #[must_use]
    pub fn new(
        path: PathBuf,
        content_len: usize,
        include_dirs: Vec<PathBuf>,
        children: Vec<ParsedFile>,
    ) -> Self {
        let dir = path.parent().map_or_else(|| path.clone(), Path::to_path_buf);
        Self {
            path,
            dir,
            content_len,
            include_dirs,
            children,
        }
    }

    /// Returns the absolute, normalized path of this file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the directory containing this file.
    ///
    /// Relative references in this file's directives were anchored here.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the byte length of the file's content.
    ///
    /// The content itself is not retained past directive extraction.
    #[must_use]
    pub const fn content_len(&self) -> usize {
        self.content_len
    }

    /// Returns the normalized directories named by `#includedir`
    /// directives in this file, in directive order.
    ///
    /// A directory appears here whether or not it could be listed.
    #[must_use]
    pub fn include_dirs(&self) -> &[PathBuf] {
        &self.include_dirs
    }

    /// Returns the files this node pulled in, in directive order:
    /// `#include` references first, then the entries of each expanded
    /// directory.
    ///
    /// No two children share a path; duplicate references are dropped
    /// during resolution.
    #[must_use]
    pub fn children(&self) -> &[ParsedFile] {
        &self.children
    }

    /// Visits this node and all descendants in preorder.
    pub fn visit<F: FnMut(&ParsedFile)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Returns the number of nodes in this subtree, this node included.
    ///
    /// A file reached through two independent inclusion chains is counted
    /// once per occurrence; use [`Resolution`](crate::Resolution) for the
    /// duplicate-free view.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_| count += 1);
        count
    }
}

/// The outcome of parsing an include graph: the node tree plus the
/// diagnostics for every reference that contributed nothing.
///
/// Dropped references are not errors. They are recorded here so callers
/// that care (an administrator auditing a configuration, say) can see what
/// was skipped and why, while callers that only want the reachable sets
/// can ignore them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeTree {
    root: ParsedFile,
    skipped: Vec<SkippedInclude>,
}

impl IncludeTree {
    /// Wraps a parsed root node with its skip diagnostics.
    #[must_use]
    pub fn new(root: ParsedFile, skipped: Vec<SkippedInclude>) -> Self {
        Self { root, skipped }
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> &ParsedFile {
        &self.root
    }

    /// Returns the references dropped during resolution, in the order they
    /// were encountered.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedInclude] {
        &self.skipped
    }

    /// Consumes the tree, returning the root node.
    #[must_use]
    pub fn into_root(self) -> ParsedFile {
        self.root
    }

    /// Flattens the tree into its duplicate-free file and directory sets.
    ///
    /// Equivalent to [`Resolution::from_tree`](crate::Resolution::from_tree)
    /// on the root node.
    #[must_use]
    pub fn flatten(&self) -> crate::Resolution {
        crate::Resolution::from_tree(&self.root)
    }
}

/// A reference that was dropped during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedInclude {
    path: PathBuf,
    included_from: PathBuf,
    reason: SkipReason,
}

impl SkippedInclude {
    /// Records that `path`, referenced from `included_from`, contributed
    /// nothing to the tree.
    #[must_use]
    pub fn new(path: PathBuf, included_from: PathBuf, reason: SkipReason) -> Self {
        Self {
            path,
            included_from,
            reason,
        }
    }

    /// Returns the normalized destination that was dropped.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file whose directive named the dropped destination.
    #[must_use]
    pub fn included_from(&self) -> &Path {
        &self.included_from
    }

    /// Returns why the reference was dropped.
    #[must_use]
    pub fn reason(&self) -> &SkipReason {
        &self.reason
    }
}

impl fmt::Display for SkippedInclude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (included from {})",
            self.path.display(),
            self.reason,
            self.included_from.display()
        )
    }
}

/// Why a reference was dropped during resolution.
///
/// None of these abort a resolution; the affected branch is simply absent
/// from the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file could not be read as text.
    Unreadable {
        /// The kind of I/O failure.
        kind: io::ErrorKind,
    },
    /// The path was already visited on this descent chain (a cycle or a
    /// duplicate reference), so descending again would repeat work or
    /// never terminate.
    AlreadyIncluded,
    /// The directory could not be listed. The directory still appears in
    /// the referencing node's `include_dirs`; it just contributed no
    /// entries.
    UnlistableDirectory {
        /// The kind of I/O failure.
        kind: io::ErrorKind,
    },
    /// Descending would exceed the resolver's depth limit.
    DepthLimitExceeded {
        /// The configured limit that was hit.
        limit: usize,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { kind } => write!(f, "unreadable ({kind})"),
            Self::AlreadyIncluded => write!(f, "already included on this chain"),
            Self::UnlistableDirectory { kind } => write!(f, "directory not listable ({kind})"),
            Self::DepthLimitExceeded { limit } => {
                write!(f, "include depth limit ({limit}) exceeded")
            }
        }
    }
}
