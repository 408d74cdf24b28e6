//! Directory expansion.
//!
//! An `#includedir` directive pulls in the immediate entries of a
//! directory. Expansion is non-recursive and unfiltered: files and
//! subdirectories both come back as candidate file references, matching
//! the way the directive behaves in practice (a subdirectory entry later
//! fails to read as text, which is a recoverable per-entry failure, not a
//! fatal one).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::path::normalize::anchor;

/// Lists the immediate entries of `dir` as normalized file references.
///
/// Each entry name is anchored against the directory itself, so the
/// returned paths are absolute whenever `dir` is. Entries come back in
/// whatever order the filesystem enumeration yields them; no sorting is
/// applied.
///
/// # Errors
///
/// Returns the underlying I/O error when `dir` does not exist, is not a
/// directory, or cannot be read. Callers treat this as "the directory
/// contributed zero entries" rather than a fatal condition.
///
/// # Examples
///
/// ```no_run
/// use sudomap::resolver::expand::list_directory;
/// use std::path::Path;
///
/// let entries = list_directory(Path::new("/etc/sudoers.d")).unwrap();
/// for entry in &entries {
///     assert!(entry.starts_with("/etc/sudoers.d"));
/// }
/// ```
pub fn list_directory(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(anchor(Path::new(&entry.file_name()), dir));
    }
    Ok(entries)
}
