//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve the include closure of a configuration file
//! - `tree`: Display the include graph as a tree
//! - `check`: Verify that every include reference resolves
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod resolve;
pub mod tree;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use tree::TreeCommand;
