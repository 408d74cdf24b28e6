//! Directive extraction from configuration file text.
//!
//! A directive is a line that pulls another file or directory into the
//! configuration: `#include FILE` or `#includedir DIR`. Matching is
//! bit-exact: the line must begin with the directive keyword followed by
//! exactly one space, and the remainder of the line is the reference,
//! verbatim. There is no comment stripping, no quoting, and no unescaping,
//! so extraction is pure text processing with no filesystem access.
//!
//! The two prefixes live in a [`DirectiveSyntax`] value rather than being
//! buried in the scanner, which keeps the matching rule auditable and lets
//! tests exercise alternative grammars.

use crate::error::{Error, Result};

/// Prefix that classifies a line as an include-file directive.
///
/// The trailing space is part of the match: `#includex` or a tab after the
/// keyword does not count.
pub const INCLUDE_FILE_PREFIX: &str = "#include ";

/// Prefix that classifies a line as an include-directory directive.
pub const INCLUDE_DIRECTORY_PREFIX: &str = "#includedir ";

/// The directive grammar used when scanning file content.
///
/// The default value recognizes the sudoers tokens. Custom prefixes can be
/// supplied for configuration dialects that spell the directives
/// differently; they are validated so that classification stays
/// unambiguous.
///
/// # Examples
///
/// ```
/// use sudomap::directive::DirectiveSyntax;
///
/// let syntax = DirectiveSyntax::default();
/// let found = syntax.extract(
///     "#include sudoers.local\nroot ALL=(ALL) ALL\n#includedir /etc/sudoers.d\n",
/// );
/// assert_eq!(found.files, vec!["sudoers.local".to_string()]);
/// assert_eq!(found.directories, vec!["/etc/sudoers.d".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSyntax {
    file_prefix: String,
    directory_prefix: String,
}

impl Default for DirectiveSyntax {
    fn default() -> Self {
        Self {
            file_prefix: INCLUDE_FILE_PREFIX.to_string(),
            directory_prefix: INCLUDE_DIRECTORY_PREFIX.to_string(),
        }
    }
}

impl DirectiveSyntax {
    /// Creates a syntax with custom directive prefixes.
    ///
    /// The prefixes are matched against the start of each line exactly as
    /// given, so a trailing space must be included if the grammar requires
    /// one.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either prefix is empty, if the two
    /// prefixes are equal, or if one is a prefix of the other (which would
    /// make classification depend on evaluation order).
    ///
    /// # Examples
    ///
    /// ```
    /// use sudomap::directive::DirectiveSyntax;
    ///
    /// let syntax = DirectiveSyntax::new("@import ", "@importdir ").unwrap();
    /// let found = syntax.extract("@import extra.conf");
    /// assert_eq!(found.files, vec!["extra.conf".to_string()]);
    ///
    /// assert!(DirectiveSyntax::new("#include ", "#include ").is_err());
    /// ```
    pub fn new(
        file_prefix: impl Into<String>,
        directory_prefix: impl Into<String>,
    ) -> Result<Self> {
        let file_prefix = file_prefix.into();
        let directory_prefix = directory_prefix.into();

        if file_prefix.is_empty() {
            return Err(Error::Validation {
                field: "file_prefix".to_string(),
                message: "directive prefix must be non-empty".to_string(),
            });
        }
        if directory_prefix.is_empty() {
            return Err(Error::Validation {
                field: "directory_prefix".to_string(),
                message: "directive prefix must be non-empty".to_string(),
            });
        }
        if file_prefix.starts_with(&directory_prefix)
            || directory_prefix.starts_with(&file_prefix)
        {
            return Err(Error::Validation {
                field: "directory_prefix".to_string(),
                message: format!(
                    "prefixes {file_prefix:?} and {directory_prefix:?} overlap; \
                     neither may be a prefix of the other"
                ),
            });
        }

        Ok(Self {
            file_prefix,
            directory_prefix,
        })
    }

    /// Returns the prefix that marks an include-file directive.
    #[must_use]
    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// Returns the prefix that marks an include-directory directive.
    #[must_use]
    pub fn directory_prefix(&self) -> &str {
        &self.directory_prefix
    }

    /// Extracts directive references from raw file content.
    ///
    /// The content is split into lines on any newline convention (`\n`,
    /// `\r\n`, or lone `\r`) and each line is classified independently.
    /// Lines matching neither prefix are ignored; references are returned
    /// verbatim, in order of appearance, separated by kind.
    #[must_use]
    pub fn extract(&self, content: &str) -> Directives {
        self.extract_lines(split_lines(content))
    }

    /// Extracts directive references from pre-split lines.
    ///
    /// This is the same classification as [`extract`](Self::extract) for
    /// callers that already hold the file's lines.
    pub fn extract_lines<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Directives {
        let mut directives = Directives::default();
        for line in lines {
            // The longer directory prefix cannot match an include-file
            // line, and validation keeps the two from overlapping, so
            // check order does not affect the outcome.
            if let Some(reference) = line.strip_prefix(self.directory_prefix.as_str()) {
                directives.directories.push(reference.to_string());
            } else if let Some(reference) = line.strip_prefix(self.file_prefix.as_str()) {
                directives.files.push(reference.to_string());
            }
        }
        directives
    }
}

/// References extracted from one file's content, separated by kind.
///
/// Both sequences preserve the order the directives appeared in, which is
/// what fixes the child ordering of a parsed file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    /// References named by include-file directives, verbatim.
    pub files: Vec<String>,
    /// References named by include-directory directives, verbatim.
    pub directories: Vec<String>,
}

impl Directives {
    /// Returns true if no directive of either kind was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }
}

/// Split content into lines on `\n`, `\r\n`, or lone `\r`.
///
/// `\r\n` yields an extra empty line between the two separators; empty
/// lines never match a directive prefix, so this is harmless.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split(['\n', '\r'])
}
