//! upconfig - print a layered, placeholder-resolved property configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Register the requested property sources with the configuration builder.
//! - Print the resolved set (or one value) in the requested format.
//!
//! Does NOT handle:
//! - Merge or resolution logic (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - Sources register in category order: files, optional files, dotenv files,
//!   environment, then `--set` overrides at the highest priority.
//! - Logs go to stderr; stdout only carries the rendered configuration.

mod args;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use upconfig::ConfigBuilder;
use upconfig::source::{DotenvSource, EnvSource, FileSource, ProgrammaticSource};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = upconfig::source::load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}

/// Register every source requested on the command line.
fn configure(cli: &Cli) -> ConfigBuilder {
    let mut builder = ConfigBuilder::new()
        .delimiters(&cli.start_delimiter, &cli.end_delimiter)
        .ignore_unresolvable_placeholders(cli.ignore_unresolved);

    for path in &cli.files {
        builder = builder.add_source(FileSource::required(path));
    }
    for path in &cli.optional_files {
        builder = builder.add_source(FileSource::optional(path));
    }
    for path in &cli.dotenv_files {
        builder = builder.add_source(DotenvSource::new(path, false));
    }
    if cli.env {
        builder = builder.register(
            EnvSource::normalized(&cli.env_prefix, cli.lowercase_env, cli.underscore_to_dot),
            Default::default(),
        );
    }
    if !cli.overrides.is_empty() {
        let overrides = cli
            .overrides
            .iter()
            .fold(ProgrammaticSource::new(), |source, (key, value)| {
                source.add(key, value)
            });
        builder = builder.add_highest_priority_source(overrides);
    }

    builder
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let builder = configure(cli);
    tracing::debug!(sources = builder.source_count(), "Building configuration");

    let properties = builder
        .build()
        .context("Failed to build configuration")?;

    let rendered = match &cli.key {
        Some(key) => match properties.get(key) {
            Some(value) => formatters::format_value(key, value, cli.output)?,
            None => {
                eprintln!("Key '{}' is not defined", key);
                return Ok(ExitCode::NotFound);
            }
        },
        None => formatters::format_properties(&properties, cli.output)?,
    };

    print!("{rendered}");
    Ok(ExitCode::Success)
}
