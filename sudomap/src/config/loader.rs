//! Configuration file discovery and loading.
//!
//! This module handles locating and loading the sudomap configuration
//! file: either an explicitly named file, or the user configuration at
//! `~/.sudomap/config.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// A loaded configuration file together with where it came from.
///
/// # Examples
///
/// ```
/// use sudomap::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let source = ConfigSource {
///     path: PathBuf::from("/home/admin/.sudomap/config.yaml"),
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from disk.
///
/// # Examples
///
/// ```no_run
/// use sudomap::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load(None).unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration file to use.
    ///
    /// With `explicit` set, that file is loaded and must exist. Otherwise
    /// the user configuration at `~/.sudomap/config.yaml` is loaded if
    /// present; a missing user config is not an error (`Ok(None)`).
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file does not exist, or if
    /// any file that is read fails to parse.
    pub fn load(explicit: Option<&Path>) -> Result<Option<ConfigSource>> {
        match explicit {
            Some(path) => {
                let config = Self::load_file(path)?;
                Ok(Some(ConfigSource {
                    path: path.to_path_buf(),
                    config,
                }))
            }
            None => Self::load_user_config(),
        }
    }

    /// Loads the user configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if the home directory cannot be determined.
    fn load_user_config() -> Result<Option<ConfigSource>> {
        let config_path = Self::user_config_path()?;

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            config,
        }))
    }

    /// Loads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read and
    /// [`Error::Configuration`] if its YAML does not parse.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Returns the user config file path, `~/.sudomap/config.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::Validation {
            field: "home".to_string(),
            message: "Cannot determine home directory".to_string(),
        })?;
        Ok(home.join(".sudomap").join("config.yaml"))
    }
}
