//! Shared fixture helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// An on-disk include-tree fixture rooted in a temporary directory.
///
/// Paths handed to `file` and `dir` are relative to the fixture root;
/// parent directories are created as needed. The temporary directory is
/// removed when the fixture is dropped.
pub struct Fixture {
    temp_dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The fixture's root directory.
    pub fn base(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a fixture-relative name, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Writes a file with the given content, creating parent directories.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Creates an empty directory, parents included.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        fs::create_dir_all(&path).unwrap();
        path
    }
}
