//! Configuration system for sudomap.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (`~/.sudomap/config.yaml` or an explicit path)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (SUDOMAP_*)
//! 3. Config file (explicit path, or `~/.sudomap/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use sudomap::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let resolver = config.resolver().unwrap();
//! ```
//!
//! Loading from a specific file:
//!
//! ```no_run
//! use sudomap::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_config_file("/etc/sudomap.yaml")
//!     .build()
//!     .unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DirectivesConfig};
