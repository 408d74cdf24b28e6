//! Layered configuration loading: file, environment, and programmatic
//! overrides combined through the builder.
//!
//! Tests that touch SUDOMAP_* variables are serialized because the
//! process environment is shared.

mod common;

use std::env;
use std::path::PathBuf;

use common::Fixture;
use serial_test::serial;
use sudomap::config::{Config, ConfigBuilder};
use sudomap::output::OutputFormat;
use sudomap::Error;

/// Runs `f` with the given variables set, restoring the previous
/// environment afterwards.
fn with_env_vars<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(name, _)| ((*name).to_string(), env::var(name).ok()))
        .collect();
    for (name, value) in vars {
        env::set_var(name, value);
    }
    let result = f();
    for (name, previous) in saved {
        match previous {
            Some(value) => env::set_var(&name, value),
            None => env::remove_var(&name),
        }
    }
    result
}

#[test]
#[serial]
fn test_file_values_loaded() {
    let fx = Fixture::new();
    let path = fx.file(
        "config.yaml",
        "max_depth: 10\noutput_format: json\nroot_prefix: /srv/staged\n",
    );

    let config = ConfigBuilder::new()
        .with_config_file(&path)
        .skip_env()
        .build()
        .unwrap();
    assert_eq!(config.max_depth, Some(10));
    assert_eq!(config.output_format, Some(OutputFormat::Json));
    assert_eq!(config.root_prefix, Some(PathBuf::from("/srv/staged")));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let fx = Fixture::new();
    let path = fx.file("config.yaml", "max_depth: 10\noutput_format: json\n");

    let config = with_env_vars(&[("SUDOMAP_MAX_DEPTH", "3")], || {
        ConfigBuilder::new()
            .with_config_file(&path)
            .build()
            .unwrap()
    });

    assert_eq!(config.max_depth, Some(3));
    // Untouched fields keep the file's value.
    assert_eq!(config.output_format, Some(OutputFormat::Json));
}

#[test]
#[serial]
fn test_env_directive_prefixes() {
    let config = with_env_vars(
        &[
            ("SUDOMAP_INCLUDE_PREFIX", "@import "),
            ("SUDOMAP_INCLUDEDIR_PREFIX", "@importdir "),
        ],
        || ConfigBuilder::new().skip_files().build().unwrap(),
    );

    let syntax = config.directive_syntax().unwrap();
    assert_eq!(syntax.file_prefix(), "@import ");
    assert_eq!(syntax.directory_prefix(), "@importdir ");
}

#[test]
#[serial]
fn test_env_invalid_depth_rejected() {
    let result = with_env_vars(&[("SUDOMAP_MAX_DEPTH", "not-a-number")], || {
        ConfigBuilder::new().skip_files().build()
    });
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_programmatic_overrides_beat_env() {
    let config = with_env_vars(&[("SUDOMAP_MAX_DEPTH", "3")], || {
        ConfigBuilder::new()
            .skip_files()
            .with_config(Config {
                max_depth: Some(7),
                ..Default::default()
            })
            .build()
            .unwrap()
    });
    assert_eq!(config.max_depth, Some(7));
}

#[test]
#[serial]
fn test_env_output_format_and_root_prefix() {
    let config = with_env_vars(
        &[
            ("SUDOMAP_OUTPUT_FORMAT", "plain"),
            ("SUDOMAP_ROOT_PREFIX", "/srv/staged"),
        ],
        || ConfigBuilder::new().skip_files().build().unwrap(),
    );
    assert_eq!(config.output_format, Some(OutputFormat::Plain));
    assert_eq!(config.root_prefix, Some(PathBuf::from("/srv/staged")));
}

#[test]
fn test_defaults_resolver_round_trip() {
    // A default config builds the stock resolver and resolves real trees.
    let fx = Fixture::new();
    let root = fx.file("sudoers", "#include extra\n");
    let extra = fx.file("extra", "");

    let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
    let resolver = config.resolver().unwrap();
    let resolution = resolver.resolve(&root).unwrap();
    assert!(resolution.contains_file(&extra));
}

#[test]
#[serial]
fn test_yaml_syntax_error_reported() {
    let fx = Fixture::new();
    let path = fx.file("config.yaml", "max_depth: [unclosed\n");

    let err = ConfigBuilder::new()
        .with_config_file(&path)
        .skip_env()
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
#[serial]
fn test_unknown_field_rejected() {
    let fx = Fixture::new();
    let path = fx.file("config.yaml", "max_deppth: 4\n");

    let result = ConfigBuilder::new()
        .with_config_file(&path)
        .skip_env()
        .build();
    assert!(result.is_err());
}
