//! Output formatting for resolutions.
//!
//! This module renders a [`Resolution`] into the supported output formats:
//! a human-readable listing, plain newline-separated paths for scripting,
//! and JSON.

mod formatters;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Resolution;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, PlainFormatter};

/// Trait for rendering a resolution into a string.
pub trait OutputFormatter {
    /// Render the given resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution cannot be represented in this
    /// format (e.g., non-UTF-8 paths in JSON output).
    fn format(&self, resolution: &Resolution) -> Result<String>;
}

/// Available output formats for resolutions.
///
/// # Examples
///
/// ```
/// use sudomap::output::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned listing for direct display.
    Human,
    /// One file path per line, nothing else.
    Plain,
    /// Pretty-printed JSON object with `files` and `directories` arrays.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Plain => Box::new(PlainFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}
