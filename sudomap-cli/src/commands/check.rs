//! Check command implementation.
//!
//! This module implements the `check` command, which resolves the include
//! closure and fails when any reference could not be followed. Intended
//! for CI and pre-deployment validation of staged configuration trees.

use crate::error::CliError;
use crate::utils::{build_resolver, load_configuration, resolve_root, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Verify that every include reference resolves.
#[derive(Args)]
pub struct CheckCommand {
    /// Root configuration file (defaults to /etc/sudoers)
    pub root: Option<PathBuf>,

    /// Maximum include chain depth
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Re-anchor absolute paths under this directory
    #[arg(long, value_name = "DIR")]
    pub root_prefix: Option<PathBuf>,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = &global.logger;

        // 1. Load configuration and build the resolver
        let config = load_configuration(global)?;
        let root = resolve_root(self.root, self.root_prefix.as_deref(), &config)?;
        let resolver = build_resolver(&config, self.max_depth)?;

        // 2. Parse the include graph; an unreadable root is its own failure
        let tree = resolver.parse_tree(&root).map_err(CliError::from)?;

        // 3. Report every skipped reference
        for skip in tree.skipped() {
            logger.error(&format!("unresolved include: {skip}"));
        }

        if !tree.skipped().is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "{} include reference(s) could not be resolved",
                tree.skipped().len()
            )));
        }

        // 4. All good; summarize unless quiet
        let resolution = tree.flatten();
        if !global.quiet {
            println!(
                "ok: {} file(s), {} include director{} resolved from {}",
                resolution.files().len(),
                resolution.directories().len(),
                if resolution.directories().len() == 1 {
                    "y"
                } else {
                    "ies"
                },
                root.display()
            );
        }

        Ok(())
    }
}
