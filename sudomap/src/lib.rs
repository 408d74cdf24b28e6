#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sudomap
//!
//! A library for resolving the transitive include graph of sudoers-style
//! configuration files.
//!
//! Starting from a root file, sudomap extracts `#include` and
//! `#includedir` directives, follows them recursively, and reports every
//! file that participates in the effective configuration. Includes that
//! cannot be read are recorded as diagnostics rather than aborting the
//! walk; only an unreadable root is a hard failure.
//!
//! ## Core Types
//!
//! - [`IncludeResolver`]: Drives the recursive walk
//! - [`IncludeTree`] and [`ParsedFile`]: The structured inclusion graph
//! - [`Resolution`]: Flattened, duplicate-free file and directory sets
//! - [`DirectiveSyntax`]: The directive grammar, customizable per install
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use sudomap::{IncludeResolver, Resolution};
//!
//! let resolver = IncludeResolver::new();
//! let tree = resolver.parse_tree("/etc/sudoers")?;
//! let resolution = Resolution::from_tree(tree.root());
//!
//! for file in resolution.files() {
//!     println!("{}", file.display());
//! }
//! for skip in tree.skipped() {
//!     eprintln!("skipped {}: {}", skip.path().display(), skip.reason());
//! }
//! # Ok::<(), sudomap::Error>(())
//! ```

pub mod config;
pub mod directive;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod resolution;
pub mod resolver;
pub mod tree;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use directive::{DirectiveSyntax, Directives};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use resolution::Resolution;
pub use resolver::{IncludeResolver, DEFAULT_MAX_DEPTH};
pub use tree::{IncludeTree, ParsedFile, SkipReason, SkippedInclude};
