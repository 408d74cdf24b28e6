//! Path handling for include resolution.
//!
//! This module provides the lexical path machinery the resolver is built
//! on: anchoring include references against the directory of the file that
//! named them, and normalizing user-supplied root paths.
//!
//! # Key Concepts
//!
//! ## Anchoring
//!
//! Every reference extracted from a directive is anchored before use:
//! absolute references stand on their own, relative references attach to
//! the directory of the including file, and `.`/`..` components are
//! collapsed. Anchoring is infallible, so a strange reference can never
//! abort a resolution.
//!
//! ## Normalization
//!
//! Normalization converts user-supplied entry paths to a canonical absolute
//! form by expanding tilde (~), making relative paths absolute against the
//! current directory, and resolving `.` and `..` components.
//!
//! ## No symlink resolution
//!
//! Both operations are purely lexical. Symlinks are deliberately never
//! followed: destinations are identified by the textual path the directives
//! produce, so two references spelled the same way always coincide, and two
//! spelled differently stay distinct even when they alias on disk.
//!
//! # Examples
//!
//! ```
//! use sudomap::path::anchor;
//! use std::path::{Path, PathBuf};
//!
//! let dest = anchor(Path::new("extra/devs"), Path::new("/etc/sudoers.d"));
//! assert_eq!(dest, PathBuf::from("/etc/sudoers.d/extra/devs"));
//! ```

pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key functions
pub use normalize::{anchor, expand_tilde, normalize, resolve_components};
