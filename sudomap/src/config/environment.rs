//! Environment variable handling for configuration overrides.
//!
//! This module provides support for SUDOMAP_* environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::{Config, DirectivesConfig};
use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use sudomap::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the SUDOMAP_* environment variables and applies them to the
    /// configuration with higher precedence than file-based values.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-numeric depth or an unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // SUDOMAP_MAX_DEPTH
        if let Ok(depth) = env::var("SUDOMAP_MAX_DEPTH") {
            config.max_depth = Some(Self::parse_depth("SUDOMAP_MAX_DEPTH", &depth)?);
        }

        // SUDOMAP_INCLUDE_PREFIX / SUDOMAP_INCLUDEDIR_PREFIX
        Self::apply_directive_overrides(config);

        // SUDOMAP_OUTPUT_FORMAT
        if let Ok(format) = env::var("SUDOMAP_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse_format("SUDOMAP_OUTPUT_FORMAT", &format)?);
        }

        // SUDOMAP_ROOT_PREFIX
        if let Ok(prefix) = env::var("SUDOMAP_ROOT_PREFIX") {
            config.root_prefix = Some(PathBuf::from(prefix));
        }

        Ok(())
    }

    /// Apply directive prefix overrides.
    ///
    /// The resulting grammar is validated later, when a resolver is built
    /// from the merged configuration.
    fn apply_directive_overrides(config: &mut Config) {
        let include = env::var("SUDOMAP_INCLUDE_PREFIX").ok();
        let includedir = env::var("SUDOMAP_INCLUDEDIR_PREFIX").ok();

        if include.is_none() && includedir.is_none() {
            return;
        }

        let directives = config
            .directives
            .get_or_insert_with(DirectivesConfig::default);
        if include.is_some() {
            directives.include = include;
        }
        if includedir.is_some() {
            directives.includedir = includedir;
        }
    }

    /// Parse a depth limit from a string.
    fn parse_depth(field: &str, s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Invalid depth '{s}' (expected a non-negative integer)"),
        })
    }

    /// Parse an output format from a string.
    ///
    /// The accepted spellings are the serde names of [`OutputFormat`]
    /// (case-insensitive), the same ones the config file takes.
    fn parse_format(field: &str, s: &str) -> Result<OutputFormat> {
        let name = s.trim().to_lowercase();
        serde_yaml::from_str(&name).map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Invalid output format: '{s}' (expected human/plain/json)"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_depth_valid() {
        assert_eq!(EnvironmentConfig::parse_depth("test", "0").unwrap(), 0);
        assert_eq!(EnvironmentConfig::parse_depth("test", "64").unwrap(), 64);
        assert_eq!(EnvironmentConfig::parse_depth("test", " 8 ").unwrap(), 8);
    }

    #[test]
    fn test_parse_depth_invalid() {
        assert!(EnvironmentConfig::parse_depth("test", "deep").is_err());
        assert!(EnvironmentConfig::parse_depth("test", "-1").is_err());
        assert!(EnvironmentConfig::parse_depth("test", "").is_err());
    }

    #[test]
    fn test_parse_format_variants() {
        assert_eq!(
            EnvironmentConfig::parse_format("test", "human").unwrap(),
            OutputFormat::Human
        );
        assert_eq!(
            EnvironmentConfig::parse_format("test", "PLAIN").unwrap(),
            OutputFormat::Plain
        );
        assert_eq!(
            EnvironmentConfig::parse_format("test", "Json").unwrap(),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_parse_format_invalid() {
        assert!(EnvironmentConfig::parse_format("test", "yaml").is_err());
        assert!(EnvironmentConfig::parse_format("test", "").is_err());
    }

    #[test]
    fn test_parse_format_matches_serde_names() {
        for format in [OutputFormat::Human, OutputFormat::Plain, OutputFormat::Json] {
            let name = format.to_string();
            assert_eq!(EnvironmentConfig::parse_format("test", &name).unwrap(), format);
        }
    }

    #[test]
    fn test_apply_overrides_no_env_vars() {
        // This test doesn't set any env vars, just ensures no crashes
        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        assert!(result.is_ok());
    }
}
