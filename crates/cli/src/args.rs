//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse `KEY=VALUE` overrides.
//!
//! Non-responsibilities:
//! - Does not build the configuration (see `main`).
//! - Does not format output (see `formatters`).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "upconfig")]
#[command(about = "Assemble layered properties and print the resolved configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  upconfig --file app.properties\n  upconfig --file base.properties --file local.properties db.url\n  upconfig --env --env-prefix APP_ --lowercase-env --underscore-to-dot --output json\n  upconfig --file app.properties --set db.host=localhost --ignore-unresolved\n"
)]
pub struct Cli {
    /// Required `.properties` file; later files override earlier ones
    #[arg(short, long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// `.properties` file that is skipped when missing
    #[arg(long = "optional-file", value_name = "FILE")]
    pub optional_files: Vec<PathBuf>,

    /// `.env` file to read as a property source
    #[arg(long = "dotenv", value_name = "FILE")]
    pub dotenv_files: Vec<PathBuf>,

    /// Include a snapshot of the process environment
    #[arg(long, env = "UPCONFIG_ENV")]
    pub env: bool,

    /// Only include environment variables starting with this prefix
    #[arg(long, env = "UPCONFIG_ENV_PREFIX", default_value = "", requires = "env")]
    pub env_prefix: String,

    /// Lower-case environment variable names
    #[arg(long, requires = "env")]
    pub lowercase_env: bool,

    /// Replace `_` with `.` in environment variable names
    #[arg(long, requires = "env")]
    pub underscore_to_dot: bool,

    /// Property override with the highest priority (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub overrides: Vec<(String, String)>,

    /// Placeholder start delimiter
    #[arg(long, env = "UPCONFIG_START_DELIMITER", default_value = upconfig::constants::DEFAULT_START_DELIMITER)]
    pub start_delimiter: String,

    /// Placeholder end delimiter
    #[arg(long, env = "UPCONFIG_END_DELIMITER", default_value = upconfig::constants::DEFAULT_END_DELIMITER)]
    pub end_delimiter: String,

    /// Leave placeholders that reference undefined keys as-is instead of failing
    #[arg(long, env = "UPCONFIG_IGNORE_UNRESOLVED")]
    pub ignore_unresolved: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print only the value of this key
    pub key: Option<String>,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `key=value` lines sorted by key
    Text,
    /// A JSON object sorted by key
    Json,
}

/// Parse a `KEY=VALUE` argument. The value may itself contain `=`.
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.trim().is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}
