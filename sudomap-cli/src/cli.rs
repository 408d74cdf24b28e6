//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CheckCommand, CompletionsCommand, ResolveCommand, TreeCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving sudoers-style include graphs.
#[derive(Parser)]
#[command(name = "sudomap")]
#[command(version, about = "Resolve sudoers-style include graphs", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(long, value_name = "PATH", global = true, env = "SUDOMAP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the include closure of a configuration file
    Resolve(ResolveCommand),

    /// Display the include graph as a tree
    Tree(TreeCommand),

    /// Verify that every include reference resolves
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
