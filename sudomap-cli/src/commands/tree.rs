//! Tree command implementation.
//!
//! This module implements the `tree` command, which parses the include
//! graph and prints its structure with one node per line, followed by a
//! summary of skipped references. With `--format json` the node graph is
//! emitted as a JSON document instead.

use crate::error::CliError;
use crate::utils::{build_resolver, load_configuration, resolve_root, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use sudomap::ParsedFile;

/// Display the include graph as a tree.
#[derive(Args)]
pub struct TreeCommand {
    /// Root configuration file (defaults to /etc/sudoers)
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = TreeFormat::Human, ignore_case = true)]
    pub format: TreeFormat,

    /// Maximum include chain depth
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Re-anchor absolute paths under this directory
    #[arg(long, value_name = "DIR")]
    pub root_prefix: Option<PathBuf>,
}

/// Output format for the tree command.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TreeFormat {
    /// Indented listing with box-drawing connectors
    Human,
    /// The serialized node graph
    Json,
}

impl TreeCommand {
    /// Execute the tree command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration and build the resolver
        let config = load_configuration(global)?;
        let root = resolve_root(self.root, self.root_prefix.as_deref(), &config)?;
        let resolver = build_resolver(&config, self.max_depth)?;

        // 2. Parse the include graph
        global
            .logger
            .info(&format!("resolving {}", root.display()));
        let parsed = resolver.parse_tree(&root).map_err(CliError::from)?;

        // 3. Render the tree to stdout
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if self.format == TreeFormat::Json {
            let json = serde_json::to_string_pretty(parsed.root())
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            writeln!(handle, "{json}")?;
            return Ok(());
        }
        writeln!(handle, "{}", parsed.root().path().display())?;
        render_children(&mut handle, parsed.root(), "")?;

        // 4. Append skipped references, unless suppressed
        if !global.quiet && !parsed.skipped().is_empty() {
            writeln!(handle)?;
            writeln!(handle, "Skipped ({}):", parsed.skipped().len())?;
            for skip in parsed.skipped() {
                writeln!(handle, "  {skip}")?;
            }
        }

        Ok(())
    }
}

/// Render a node's directory references and children, recursively.
///
/// Directory references print before children with a `[dir]` marker, so
/// the source of directory-expanded children is visible above them.
fn render_children(
    out: &mut impl Write,
    node: &ParsedFile,
    prefix: &str,
) -> Result<(), CliError> {
    let dirs = node.include_dirs();
    let children = node.children();
    let total = dirs.len() + children.len();

    for (index, dir) in dirs.iter().enumerate() {
        let connector = if index + 1 == total { "└── " } else { "├── " };
        writeln!(out, "{prefix}{connector}[dir] {}", dir.display())?;
    }

    for (offset, child) in children.iter().enumerate() {
        let index = dirs.len() + offset;
        let last = index + 1 == total;
        let connector = if last { "└── " } else { "├── " };
        writeln!(out, "{prefix}{connector}{}", child.path().display())?;

        let extension = if last { "    " } else { "│   " };
        let child_prefix = format!("{prefix}{extension}");
        render_children(out, child, &child_prefix)?;
    }

    Ok(())
}
