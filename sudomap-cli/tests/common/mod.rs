//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Include-tree fixtures in temporary directories
//! - Command builder helpers

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an on-disk include-tree fixture.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    temp_dir: TempDir,
}

impl TestEnv {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// The fixture's base directory.
    pub fn base(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a fixture-relative name.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write a file with the given content, creating parent directories.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Create an empty directory, parents included.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        fs::create_dir_all(&path).expect("Failed to create fixture dir");
        path
    }

    /// Get a command builder for the sudomap binary.
    ///
    /// The environment is scrubbed of SUDOMAP_* variables so tests do not
    /// leak into each other, and the config lookup is pointed at an empty
    /// HOME inside the fixture.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sudomap").expect("Failed to find sudomap binary");
        cmd.env_remove("SUDOMAP_CONFIG")
            .env_remove("SUDOMAP_MAX_DEPTH")
            .env_remove("SUDOMAP_INCLUDE_PREFIX")
            .env_remove("SUDOMAP_INCLUDEDIR_PREFIX")
            .env_remove("SUDOMAP_OUTPUT_FORMAT")
            .env_remove("SUDOMAP_ROOT_PREFIX")
            .env_remove("SUDOMAP_LOG_MODE")
            .env("HOME", self.path("home"));
        cmd
    }

    /// Write a standard three-file fixture and return the root path.
    ///
    /// Layout: `sudoers` includes `sudoers.local` and the `sudoers.d`
    /// directory, which holds one fragment.
    pub fn standard_layout(&self) -> PathBuf {
        self.file("sudoers.local", "admin ALL=(ALL) ALL\n");
        self.file("sudoers.d/10-base", "Defaults env_reset\n");
        self.file(
            "sudoers",
            "#include sudoers.local\n#includedir sudoers.d\n",
        )
    }
}
