//! Build script for sudomap-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("sudomap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve sudoers-style include graphs")
        .long_about(
            "Command-line tool for resolving the transitive include graph of \
             sudoers-style configuration files",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to the configuration file")
                .value_name("PATH")
                .global(true)
                .env("SUDOMAP_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve the include closure of a configuration file")
                .long_about(
                    "Resolve every file and directory reachable from the root file \
                     through include directives and print the flattened result",
                ),
            Command::new("tree")
                .about("Display the include graph as a tree")
                .long_about(
                    "Parse the include graph and print its structure, one node per \
                     line, with skipped references annotated",
                ),
            Command::new("check")
                .about("Verify that every include reference resolves")
                .long_about(
                    "Resolve the include closure and exit non-zero if any reference \
                     was skipped",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main sudomap.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("sudomap.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
