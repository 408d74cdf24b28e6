//! Configuration builder.
//!
//! [`ConfigBuilder`] assembles the final configuration from its layers:
//! built-in defaults, the configuration file, SUDOMAP_* environment
//! variables, and programmatic overrides, in ascending precedence. The
//! merged result is validated before it is handed back.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Builds a validated [`Config`] from layered sources.
///
/// # Examples
///
/// Build from defaults only, ignoring the filesystem and environment:
///
/// ```
/// use sudomap::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .build()
///     .unwrap();
/// assert!(config.max_depth.is_none());
/// ```
///
/// Apply a programmatic override on top of everything else:
///
/// ```
/// use sudomap::config::{Config, ConfigBuilder};
///
/// let custom = Config { max_depth: Some(4), ..Default::default() };
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
/// assert_eq!(config.max_depth, Some(4));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads the user config file and the
    /// environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the given file instead of the user config.
    ///
    /// Unlike the default user config, an explicitly named file must
    /// exist; `build` fails otherwise.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Skips configuration files entirely.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merges all layers and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or parsed, if
    /// an environment variable holds an invalid value, or if the merged
    /// configuration fails validation (invalid directive grammar, or a
    /// relative `root_prefix`).
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(source) = ConfigLoader::load(self.config_file.as_deref())? {
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, &overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validates a merged configuration.
    fn validate(config: &Config) -> Result<()> {
        // Surfaces bad prefixes at build time instead of first use.
        config.directive_syntax()?;

        if let Some(prefix) = &config.root_prefix {
            if !prefix.is_absolute() {
                return Err(Error::Validation {
                    field: "root_prefix".to_string(),
                    message: format!("must be an absolute path, got '{}'", prefix.display()),
                });
            }
        }

        Ok(())
    }
}
