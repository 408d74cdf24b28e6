//! Output formatter implementations.

use std::fmt::Write;

use crate::resolution::Resolution;
use crate::{Error, Result};

use super::OutputFormatter;

/// Human-readable sectioned output.
///
/// Lists resolved files and scanned include directories under labelled
/// headings with counts. This is the default format for terminal use.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, resolution: &Resolution) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(output, "Files ({}):", resolution.files().len());
        for path in resolution.files() {
            let _ = writeln!(output, "  {}", path.display());
        }

        let _ = writeln!(
            output,
            "\nInclude directories ({}):",
            resolution.directories().len()
        );
        for path in resolution.directories() {
            let _ = writeln!(output, "  {}", path.display());
        }

        Ok(output)
    }
}

/// One resolved file path per line, nothing else.
///
/// Suitable for piping into `xargs`, `while read`, and similar shell
/// plumbing. Include directories are omitted.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format(&self, resolution: &Resolution) -> Result<String> {
        let mut output = String::new();
        for path in resolution.files() {
            let _ = writeln!(output, "{}", path.display());
        }
        Ok(output)
    }
}

/// Pretty-printed JSON with `files` and `directories` arrays.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, resolution: &Resolution) -> Result<String> {
        serde_json::to_string_pretty(resolution).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize resolution: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ParsedFile;
    use std::path::PathBuf;

    fn resolution_of(paths: &[&str], dirs: &[&str]) -> Resolution {
        let mut iter = paths.iter();
        let root_path = iter.next().copied().unwrap_or("/etc/sudoers");
        let children = iter
            .map(|p| ParsedFile::new(PathBuf::from(p), 0, vec![], vec![]))
            .collect();
        let root = ParsedFile::new(
            PathBuf::from(root_path),
            0,
            dirs.iter().map(PathBuf::from).collect(),
            children,
        );
        Resolution::from_tree(&root)
    }

    fn sample_resolution() -> Resolution {
        resolution_of(
            &["/etc/sudoers", "/etc/sudoers.d/10-base"],
            &["/etc/sudoers.d"],
        )
    }

    #[test]
    fn test_human_formatter_sections() {
        let output = HumanFormatter.format(&sample_resolution()).unwrap();
        assert!(output.contains("Files (2):"));
        assert!(output.contains("  /etc/sudoers\n"));
        assert!(output.contains("Include directories (1):"));
        assert!(output.contains("  /etc/sudoers.d\n"));
    }

    #[test]
    fn test_human_formatter_no_directories() {
        let output = HumanFormatter
            .format(&resolution_of(&["/etc/sudoers"], &[]))
            .unwrap();
        assert!(output.contains("Files (1):"));
        assert!(output.contains("Include directories (0):"));
    }

    #[test]
    fn test_plain_formatter_one_path_per_line() {
        let output = PlainFormatter.format(&sample_resolution()).unwrap();
        assert_eq!(output, "/etc/sudoers\n/etc/sudoers.d/10-base\n");
    }

    #[test]
    fn test_plain_formatter_sorted() {
        let output = PlainFormatter
            .format(&resolution_of(&["/etc/z", "/etc/a"], &[]))
            .unwrap();
        assert_eq!(output, "/etc/a\n/etc/z\n");
    }

    #[test]
    fn test_json_formatter_structure() {
        let output = JsonFormatter.format(&sample_resolution()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["files"].as_array().unwrap().len(), 2);
        assert_eq!(value["directories"][0], "/etc/sudoers.d");
    }
}
