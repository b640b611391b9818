//! Error types for property sources and configuration building.
//!
//! Responsibilities:
//! - Define `SourceError`, the failure a single source read can produce.
//! - Define `ConfigError`, the terminal failure of a configuration build.
//!
//! Invariants:
//! - All error variants include context for debugging (keys, paths, source names).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - A failed build surfaces exactly one `ConfigError`; there is no partial result.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by a `PropertySource` while reading.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read property file at {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse property file at {} (line {line}): {message}", .path.display())]
    FileParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Failed to parse a `.env` file due to invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is kept, never the line content.
    #[error("Failed to parse .env file {} at position {error_index}", .path.display())]
    DotenvParse { path: PathBuf, error_index: usize },

    /// Failed to read a `.env` file due to an I/O error.
    #[error("Failed to read .env file {}: {kind}", .path.display())]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file {}", .path.display())]
    DotenvUnknown { path: PathBuf },

    #[error("{0}")]
    Custom(String),
}

impl SourceError {
    /// Whether this error means the backing resource does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            SourceError::FileRead { source, .. } => source.kind() == ErrorKind::NotFound,
            SourceError::DotenvIo { kind, .. } => *kind == ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required source could not produce data.
    #[error("Failed to read configuration source '{source_name}'")]
    SourceRead {
        source_name: String,
        #[source]
        source: SourceError,
    },

    /// A placeholder references a key that no source defines.
    #[error("Unresolvable placeholder '{key}' in value of '{referenced_by}'")]
    UnresolvablePlaceholder { key: String, referenced_by: String },

    /// Resolving a key transitively requires resolving itself.
    #[error("Cyclic placeholder reference at '{key}' ({})", .chain.join(" -> "))]
    CyclicPlaceholder { key: String, chain: Vec<String> },

    /// Expanding a single value required more substitutions than allowed.
    #[error("Placeholder expansion of '{key}' exceeded {limit} substitutions")]
    ExpansionLimit { key: String, limit: usize },

    #[error("Invalid placeholder delimiters: {message}")]
    InvalidDelimiters { message: String },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
