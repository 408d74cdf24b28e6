//! Recursive include resolution.
//!
//! [`IncludeResolver`] is the orchestrator: it reads a file, extracts its
//! directives, anchors every reference against the file's directory,
//! expands referenced directories into candidate files, and descends into
//! each candidate while threading cycle-prevention state. The result is an
//! [`IncludeTree`] of everything that was read, plus diagnostics for every
//! reference that contributed nothing.
//!
//! # Cycle prevention
//!
//! Each recursion frame owns a set of the paths accepted on its descent
//! chain; a candidate already in the set is dropped instead of descended
//! into. The set is passed down by value, so sibling subtrees do not see
//! each other's deep visits: the same file reached through two independent
//! inclusion chains is legitimately parsed once per chain. Flattening into
//! a [`Resolution`] collapses those duplicates, which is why re-parsing is
//! harmless.
//!
//! # Failure model
//!
//! The failure unit is a single reference. A nested file that cannot be
//! read, a directory that cannot be listed, a cycle, or a chain deeper
//! than the configured limit each drop one branch and are reported as
//! [`SkippedInclude`] diagnostics; the rest of the resolution proceeds.
//! Only the root file failing to read aborts the call, with
//! [`Error::RootUnreadable`].

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::directive::DirectiveSyntax;
use crate::error::{Error, Result};
use crate::path::normalize::{anchor, resolve_components};
use crate::resolution::Resolution;
use crate::tree::{IncludeTree, ParsedFile, SkipReason, SkippedInclude};

pub mod expand;

/// Default limit on include chain depth.
///
/// Real configurations nest two or three levels; the limit exists so a
/// pathological graph surfaces as a reported skip instead of exhausting
/// the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Resolves the transitive include closure of a configuration file.
///
/// The resolver is configured once and may be reused across any number of
/// root files; each call is independent, synchronous, and touches the
/// filesystem only to read files and list directories.
///
/// # Examples
///
/// ```no_run
/// use sudomap::IncludeResolver;
///
/// let resolver = IncludeResolver::new();
/// let resolution = resolver.resolve("/etc/sudoers")?;
///
/// for file in resolution.files() {
///     println!("{}", file.display());
/// }
/// # Ok::<(), sudomap::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct IncludeResolver {
    syntax: DirectiveSyntax,
    max_depth: usize,
}

impl Default for IncludeResolver {
    fn default() -> Self {
        Self {
            syntax: DirectiveSyntax::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl IncludeResolver {
    /// Creates a resolver with the sudoers directive grammar and the
    /// default depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the directive grammar to scan for.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudomap::directive::DirectiveSyntax;
    /// use sudomap::IncludeResolver;
    ///
    /// let syntax = DirectiveSyntax::new("@import ", "@importdir ").unwrap();
    /// let resolver = IncludeResolver::new().with_syntax(syntax);
    /// ```
    #[must_use]
    pub fn with_syntax(mut self, syntax: DirectiveSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Configures the maximum include chain depth.
    ///
    /// The root file sits at depth zero. A candidate whose descent would
    /// place it deeper than `max_depth` is dropped and reported as a
    /// [`SkipReason::DepthLimitExceeded`] diagnostic; a limit of zero
    /// therefore parses the root alone.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the directive grammar in use.
    #[must_use]
    pub fn syntax(&self) -> &DirectiveSyntax {
        &self.syntax
    }

    /// Returns the configured depth limit.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses the include graph rooted at `root` into a tree.
    ///
    /// The root path must be absolute; lexical `.`/`..` segments are
    /// collapsed before use. Pre-anchoring relative user input is the
    /// caller's job (see [`path::normalize`](crate::path::normalize())).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `root` is not absolute, and
    /// [`Error::RootUnreadable`] if the root file itself cannot be read.
    /// No nested failure aborts the call.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sudomap::IncludeResolver;
    ///
    /// let tree = IncludeResolver::new().parse_tree("/etc/sudoers")?;
    /// println!("parsed {} file(s)", tree.root().node_count());
    /// for skip in tree.skipped() {
    ///     eprintln!("skipped {skip}");
    /// }
    /// # Ok::<(), sudomap::Error>(())
    /// ```
    pub fn parse_tree(&self, root: impl AsRef<Path>) -> Result<IncludeTree> {
        let root = root.as_ref();
        if !root.is_absolute() {
            return Err(Error::InvalidPath {
                path: root.to_path_buf(),
                reason: "root path must be absolute".to_string(),
            });
        }
        let root = resolve_components(root);

        // The root is pre-seeded into its own visited set so a root that
        // includes itself is caught by the ordinary guard.
        let mut visited = HashSet::new();
        visited.insert(root.clone());

        let mut skipped = Vec::new();
        match self.walk(root.clone(), visited, 0, &mut skipped) {
            Ok(node) => Ok(IncludeTree::new(node, skipped)),
            Err(source) => Err(Error::RootUnreadable { path: root, source }),
        }
    }

    /// Resolves the include graph rooted at `root` into its flattened
    /// file and directory sets.
    ///
    /// This is [`parse_tree`](Self::parse_tree) followed by
    /// [`IncludeTree::flatten`]; use `parse_tree` directly when the tree
    /// shape or the skip diagnostics matter.
    ///
    /// # Errors
    ///
    /// Same conditions as [`parse_tree`](Self::parse_tree).
    pub fn resolve(&self, root: impl AsRef<Path>) -> Result<Resolution> {
        Ok(self.parse_tree(root)?.flatten())
    }

    /// One recursion frame: read `path`, collect its references, descend.
    ///
    /// `visited` is owned by the frame; accepted candidates are added to
    /// it as the loop runs (dropping duplicate references within this
    /// file) and each child receives a copy taken at its acceptance point
    /// (cutting cycles without linking sibling subtrees).
    ///
    /// The returned `Err` is this file's own read failure; the caller
    /// decides whether that skips a branch or, at the root, aborts the
    /// resolution.
    fn walk(
        &self,
        path: PathBuf,
        mut visited: HashSet<PathBuf>,
        depth: usize,
        skipped: &mut Vec<SkippedInclude>,
    ) -> io::Result<ParsedFile> {
        let content = fs::read_to_string(&path)?;
        let directives = self.syntax.extract(&content);
        let content_len = content.len();

        let dir = path.parent().map_or_else(|| path.clone(), Path::to_path_buf);

        let include_dirs: Vec<PathBuf> = directives
            .directories
            .iter()
            .map(|reference| anchor(Path::new(reference), &dir))
            .collect();

        // Directly named files first, then each directory's entries, in
        // directive order.
        let mut candidates: Vec<PathBuf> = directives
            .files
            .iter()
            .map(|reference| anchor(Path::new(reference), &dir))
            .collect();
        for include_dir in &include_dirs {
            match expand::list_directory(include_dir) {
                Ok(mut entries) => candidates.append(&mut entries),
                Err(err) => {
                    log::debug!(
                        "cannot list include directory {}: {err}",
                        include_dir.display()
                    );
                    skipped.push(SkippedInclude::new(
                        include_dir.clone(),
                        path.clone(),
                        SkipReason::UnlistableDirectory { kind: err.kind() },
                    ));
                }
            }
        }

        let mut children = Vec::new();
        for candidate in candidates {
            if visited.contains(&candidate) {
                skipped.push(SkippedInclude::new(
                    candidate,
                    path.clone(),
                    SkipReason::AlreadyIncluded,
                ));
                continue;
            }
            visited.insert(candidate.clone());

            if depth + 1 > self.max_depth {
                log::debug!(
                    "include depth limit {} reached at {}",
                    self.max_depth,
                    candidate.display()
                );
                skipped.push(SkippedInclude::new(
                    candidate,
                    path.clone(),
                    SkipReason::DepthLimitExceeded {
                        limit: self.max_depth,
                    },
                ));
                continue;
            }

            match self.walk(candidate.clone(), visited.clone(), depth + 1, skipped) {
                Ok(child) => children.push(child),
                Err(err) => {
                    log::debug!("cannot read include {}: {err}", candidate.display());
                    skipped.push(SkippedInclude::new(
                        candidate,
                        path.clone(),
                        SkipReason::Unreadable { kind: err.kind() },
                    ));
                }
            }
        }

        Ok(ParsedFile::new(path, content_len, include_dirs, children))
    }
}
