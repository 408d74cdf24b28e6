//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which resolves the
//! transitive include closure of a configuration file and prints the
//! flattened result in various formats (human, plain, JSON, CSV).

use crate::error::CliError;
use crate::utils::{build_resolver, load_configuration, resolve_root, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use sudomap::output::OutputFormat as LibFormat;
use sudomap::Resolution;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 2] = ["kind", "path"];

/// Resolve the include closure of a configuration file.
#[derive(Args)]
pub struct ResolveCommand {
    /// Root configuration file (defaults to /etc/sudoers)
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, env = "SUDOMAP_OUTPUT_FORMAT", ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Maximum include chain depth
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Re-anchor absolute paths under this directory
    #[arg(long, value_name = "DIR")]
    pub root_prefix: Option<PathBuf>,
}

/// Output format for the resolve command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned listing (human-readable)
    Human,
    /// One file path per line
    Plain,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl From<LibFormat> for OutputFormat {
    fn from(format: LibFormat) -> Self {
        match format {
            LibFormat::Human => Self::Human,
            LibFormat::Plain => Self::Plain,
            LibFormat::Json => Self::Json,
        }
    }
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = &global.logger;

        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Resolve the root path and build the resolver
        let root = resolve_root(self.root, self.root_prefix.as_deref(), &config)?;
        let resolver = build_resolver(&config, self.max_depth)?;

        // 3. Parse the include graph
        logger.info(&format!("resolving {}", root.display()));
        let tree = resolver.parse_tree(&root).map_err(CliError::from)?;

        // 4. Surface skipped references as warnings
        for skip in tree.skipped() {
            logger.warn(&format!("skipped {skip}"));
        }

        // 5. Format and output to stdout
        let resolution = tree.flatten();
        let format = self
            .format
            .or_else(|| config.output_format.map(OutputFormat::from))
            .unwrap_or(OutputFormat::Human);
        match format {
            OutputFormat::Human => print_with(LibFormat::Human, &resolution)?,
            OutputFormat::Plain => print_with(LibFormat::Plain, &resolution)?,
            OutputFormat::Json => print_with(LibFormat::Json, &resolution)?,
            OutputFormat::Csv => format_as_csv(&resolution)?,
        }

        Ok(())
    }
}

/// Render through a library formatter and write to stdout.
fn print_with(format: LibFormat, resolution: &Resolution) -> Result<(), CliError> {
    let rendered = format
        .create_formatter()
        .format(resolution)
        .map_err(CliError::from)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{rendered}")?;
    if !rendered.ends_with('\n') && !rendered.is_empty() {
        writeln!(handle)?;
    }
    Ok(())
}

/// Format the resolution as CSV with one row per file and directory.
fn format_as_csv(resolution: &Resolution) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for path in resolution.files() {
        writer
            .write_record(["file", &path.display().to_string()])
            .map_err(csv_error)?;
    }
    for path in resolution.directories() {
        writer
            .write_record(["directory", &path.display().to_string()])
            .map_err(csv_error)?;
    }
    writer.flush().map_err(CliError::Io)?;

    Ok(())
}

fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}
