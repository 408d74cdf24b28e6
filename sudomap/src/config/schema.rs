//! Configuration schema definitions.
//!
//! This module defines the configuration structure for sudomap: the
//! resolver settings (depth limit, directive grammar), the default output
//! format, and the root prefix used to resolve against a staged copy of a
//! configuration tree.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::directive::DirectiveSyntax;
use crate::error::Result;
use crate::output::OutputFormat;
use crate::resolver::{IncludeResolver, DEFAULT_MAX_DEPTH};

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to built-in defaults
/// when the configuration is consumed. Values come from the user config
/// file, `SUDOMAP_*` environment variables, or programmatic overrides,
/// merged in that order.
///
/// # Examples
///
/// ```
/// use sudomap::config::Config;
///
/// let config = Config {
///     max_depth: Some(8),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_max_depth(), 8);
/// assert_eq!(Config::default().effective_max_depth(), 64);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum include chain depth for the resolver.
    pub max_depth: Option<usize>,

    /// Directive grammar overrides.
    pub directives: Option<DirectivesConfig>,

    /// Default output format for the resolve command.
    pub output_format: Option<OutputFormat>,

    /// Directory under which root paths are re-anchored before resolution.
    ///
    /// Set this to run against a staged copy of a system configuration
    /// tree (for example a fixture directory holding `etc/sudoers`).
    pub root_prefix: Option<PathBuf>,
}

impl Config {
    /// Returns the configured depth limit, or the resolver default.
    #[must_use]
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// Builds the directive grammar this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configured prefixes are empty or
    /// overlap (see [`DirectiveSyntax::new`]).
    pub fn directive_syntax(&self) -> Result<DirectiveSyntax> {
        match &self.directives {
            None => Ok(DirectiveSyntax::default()),
            Some(directives) => {
                let defaults = DirectiveSyntax::default();
                let include = directives
                    .include
                    .clone()
                    .unwrap_or_else(|| defaults.file_prefix().to_string());
                let includedir = directives
                    .includedir
                    .clone()
                    .unwrap_or_else(|| defaults.directory_prefix().to_string());
                DirectiveSyntax::new(include, includedir)
            }
        }
    }

    /// Builds an [`IncludeResolver`] configured from this configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the directive grammar is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudomap::config::Config;
    ///
    /// let resolver = Config::default().resolver().unwrap();
    /// assert_eq!(resolver.max_depth(), 64);
    /// ```
    pub fn resolver(&self) -> Result<IncludeResolver> {
        Ok(IncludeResolver::new()
            .with_syntax(self.directive_syntax()?)
            .with_max_depth(self.effective_max_depth()))
    }
}

/// Directive grammar configuration.
///
/// Overrides the prefixes that classify a line as an include-file or
/// include-directory directive. A prefix is matched exactly as written,
/// trailing space included.
///
/// # Examples
///
/// ```
/// use sudomap::config::DirectivesConfig;
///
/// let directives = DirectivesConfig {
///     include: Some("@import ".to_string()),
///     includedir: Some("@importdir ".to_string()),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DirectivesConfig {
    /// Prefix marking an include-file directive.
    pub include: Option<String>,

    /// Prefix marking an include-directory directive.
    pub includedir: Option<String>,
}
