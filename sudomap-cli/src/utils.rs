//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, root path resolution, and resolver construction.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use sudomap::path::normalize;
use sudomap::{Config, ConfigBuilder, IncludeResolver, Logger};

/// Default root file when none is given on the command line.
pub const DEFAULT_ROOT: &str = "/etc/sudoers";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path to the configuration file.
    pub config: Option<PathBuf>,

    /// Logger built once from the verbosity flags.
    pub logger: Logger,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (SUDOMAP_*)
/// 2. Configuration file (--config, or the user config)
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build a resolver from the loaded configuration, with an optional
/// command-line depth override.
pub fn build_resolver(
    config: &Config,
    max_depth: Option<usize>,
) -> Result<IncludeResolver, CliError> {
    let mut resolver = config.resolver().map_err(CliError::from)?;
    if let Some(depth) = max_depth {
        resolver = resolver.with_max_depth(depth);
    }
    Ok(resolver)
}

/// Resolve the root file to hand to the resolver.
///
/// The path defaults to `/etc/sudoers`, is normalized (tilde expansion,
/// anchoring against the current directory, `.`/`..` collapse; symlinks
/// are not followed), and is then re-anchored under the root prefix when
/// one is configured.
pub fn resolve_root(
    root: Option<PathBuf>,
    root_prefix: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, CliError> {
    let given = root.unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    let normalized = normalize(&given).map_err(CliError::from)?;

    let prefix = root_prefix.or(config.root_prefix.as_deref());
    match prefix {
        Some(prefix) => Ok(reanchor(&normalized, prefix)),
        None => Ok(normalized),
    }
}

/// Re-anchor an absolute path under a prefix directory.
///
/// `/etc/sudoers` under prefix `/srv/staged` becomes
/// `/srv/staged/etc/sudoers`. Used to inspect a staged filesystem tree
/// without installing it.
fn reanchor(path: &Path, prefix: &Path) -> PathBuf {
    match path.strip_prefix("/") {
        Ok(relative) => prefix.join(relative),
        Err(_) => prefix.join(path),
    }
}
