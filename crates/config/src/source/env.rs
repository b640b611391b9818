//! Environment variable source.
//!
//! Responsibilities:
//! - Snapshot the process environment at read time, filtered by key prefix.
//! - Provide helper functions for reading single env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Key normalization (compose with `LowerCaseKeys` / `KeyReplace`, or use `EnvSource::normalized`).
//! - .env file loading (see `dotenv.rs`).
//!
//! Invariants:
//! - Each `read()` takes a fresh point-in-time snapshot; nothing is cached between reads.
//! - Variables whose name or value is not valid UTF-8 are skipped.
//! - Keys are kept verbatim, including the prefix.

use crate::error::SourceError;
use crate::types::{Property, PropertyMap};

use super::{KeyReplace, LowerCaseKeys, PropertySource};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Source reading the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    /// Create a source keeping only variables whose name starts with `prefix`.
    ///
    /// An empty prefix keeps every variable.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Create an environment source with optional key normalization applied.
    ///
    /// `lower_case` lower-cases every key and `underscore_to_dot` replaces `_` with `.`,
    /// so `APP_DB_HOST` can be addressed as `app.db.host`.
    pub fn normalized(
        prefix: impl Into<String>,
        lower_case: bool,
        underscore_to_dot: bool,
    ) -> Box<dyn PropertySource> {
        let source = Self::new(prefix);
        match (lower_case, underscore_to_dot) {
            (false, false) => Box::new(source),
            (true, false) => Box::new(LowerCaseKeys::new(source)),
            (false, true) => Box::new(KeyReplace::new(source, "_", ".")),
            (true, true) => Box::new(KeyReplace::new(LowerCaseKeys::new(source), "_", ".")),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl PropertySource for EnvSource {
    fn read(&self) -> Result<PropertyMap, SourceError> {
        let snapshot: PropertyMap = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .filter(|(key, _)| key.starts_with(&self.prefix))
            .map(|(key, value)| (key, Property::new(value)))
            .collect();

        tracing::debug!(
            prefix = %self.prefix,
            count = snapshot.len(),
            "Captured environment snapshot"
        );
        Ok(snapshot)
    }

    fn name(&self) -> String {
        if self.prefix.is_empty() {
            "env".to_string()
        } else {
            format!("env[{}*]", self.prefix)
        }
    }
}
