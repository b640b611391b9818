//! `.env` file support.
//!
//! Responsibilities:
//! - Read a `.env` file as a property source without touching the process environment.
//! - Load `.env` into the process environment for binaries, gated by `DOTENV_DISABLED`.
//!
//! Invariants:
//! - Errors NEVER include raw .env line contents to prevent secret leakage.
//! - `DOTENV_DISABLED=1` or `DOTENV_DISABLED=true` skips process-level loading entirely.

use std::path::{Path, PathBuf};

use crate::constants::DOTENV_DISABLED_VAR;
use crate::error::SourceError;
use crate::types::{Property, PropertyMap};

use super::{PropertySource, env_var_or_none};

/// Source backed by a `.env` file.
#[derive(Debug, Clone)]
pub struct DotenvSource {
    path: PathBuf,
    ignore_not_found: bool,
}

impl DotenvSource {
    pub fn new(path: impl Into<PathBuf>, ignore_not_found: bool) -> Self {
        Self {
            path: path.into(),
            ignore_not_found,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PropertySource for DotenvSource {
    fn read(&self) -> Result<PropertyMap, SourceError> {
        let iter = match dotenvy::from_path_iter(&self.path) {
            Ok(iter) => iter,
            Err(e) if self.ignore_not_found && is_not_found(&e) => {
                tracing::warn!(path = %self.path.display(), "Optional .env file not found");
                return Ok(PropertyMap::new());
            }
            Err(e) => return Err(map_dotenv_error(&self.path, e)),
        };

        let mut properties = PropertyMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| map_dotenv_error(&self.path, e))?;
            properties.insert(key, Property::new(value));
        }
        Ok(properties)
    }

    fn name(&self) -> String {
        format!("dotenv[{}]", self.path.display())
    }
}

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none(DOTENV_DISABLED_VAR).as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from a `.env` file in the working directory, if present.
///
/// Missing `.env` files are silently ignored. Existing process variables are not overridden.
///
/// # Errors
///
/// Returns an error if the file exists but has invalid syntax or cannot be read.
pub fn load_dotenv() -> Result<(), SourceError> {
    if dotenv_disabled() {
        return Ok(());
    }

    let path = PathBuf::from(".env");
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(e) => Err(map_dotenv_error(&path, e)),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

fn map_dotenv_error(path: &Path, err: dotenvy::Error) -> SourceError {
    match err {
        dotenvy::Error::LineParse(_, idx) => SourceError::DotenvParse {
            path: path.to_path_buf(),
            error_index: idx,
        },
        dotenvy::Error::Io(io_err) => SourceError::DotenvIo {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        },
        _ => SourceError::DotenvUnknown {
            path: path.to_path_buf(),
        },
    }
}
