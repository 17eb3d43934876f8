//! Church CLI - Command line interface
//!
//! Evaluates one typed operation on JSON-encoded arguments and prints the
//! result as JSON. Configuration comes from `church.json` (or `--config`),
//! with command line flags taking precedence.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::logging::LogFormat;
use crate::platform::{print_error, print_output};
use church_api::{init_config, run_global, ChurchConfig, ChurchError, HostValue, LogLevel, RunConfig};
use church_config::CLI_TARGET;

/// Default configuration file, read when present
const DEFAULT_CONFIG: &str = "church.json";

#[derive(Parser)]
#[command(
    name = "church",
    about = "Evaluate closure-encoded typed operations on JSON arguments",
    version
)]
struct Cli {
    /// Configuration file path (default: ./church.json when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the result's type tag alongside the value
    #[arg(long)]
    show_type: bool,

    /// Operation name, e.g. Add, Elt, Strchr
    #[arg(value_name = "OPERATION")]
    operation: String,

    /// Arguments as JSON; text that is not valid JSON is taken as a string
    #[arg(value_name = "ARG", allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(&cli) {
        print_error(&e);
        process::exit(1);
    }
}

fn execute(cli: &Cli) -> Result<(), ChurchError> {
    let mut church_config = read_config(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        church_config.logging.level = parse_log_level(level)?;
    }

    let log_config = LogConfig::from(&church_config.logging);
    logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_ref())?;

    // Initialize API config (global singleton for convenience)
    let run_config = RunConfig {
        show_type: cli.show_type,
        ..RunConfig::from_church_config(&church_config)
    };
    init_config(run_config);

    let args = cli
        .args
        .iter()
        .map(|raw| parse_arg(raw))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(target: CLI_TARGET, op = %cli.operation, argc = args.len(), "parsed arguments");

    let output = run_global(&cli.operation, &args)?;
    print_output(&output, cli.show_type)
}

/// Read the configuration file; a missing default file means defaults
fn read_config(path: Option<&Path>) -> Result<ChurchConfig, ChurchError> {
    let path = match path {
        Some(explicit) => explicit,
        None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
        None => return Ok(ChurchConfig::default()),
    };

    let content = std::fs::read_to_string(path)?;
    ChurchConfig::from_json_str(&content)
        .map_err(|e| ChurchError::Config(format!("failed to parse '{}': {}", path.display(), e)))
}

/// Parse log level string ("silent" = only errors)
fn parse_log_level(s: &str) -> Result<LogLevel, ChurchError> {
    s.parse::<LogLevel>().map_err(ChurchError::Config)
}

/// Parse one argument; invalid JSON is treated as a plain string
fn parse_arg(raw: &str) -> Result<HostValue, ChurchError> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => HostValue::try_from(&json),
        Err(_) => Ok(HostValue::Str(raw.to_string())),
    }
}
