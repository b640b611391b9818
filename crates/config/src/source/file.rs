//! `.properties` file source.
//!
//! Responsibilities:
//! - Read a Java-style properties file into a `PropertyMap`.
//! - Treat a missing file as an empty contribution when configured as optional.
//!
//! Does NOT handle:
//! - Unicode escapes or other escape sequences; values are taken as written.
//! - Placeholder expansion (values are returned verbatim).
//!
//! Format:
//! - `key=value`, `key: value` or `key value` (first separator wins).
//! - Lines starting with `#` or `!` are comments; blank lines are ignored.
//! - A trailing backslash joins the next line, whose leading whitespace is dropped.
//! - Keys and values are trimmed; a later definition of a key replaces an earlier one.

use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::types::{Property, PropertyMap};

use super::PropertySource;

/// Source backed by a `.properties` file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    ignore_not_found: bool,
}

impl FileSource {
    /// A file that must exist.
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self::new(path, false)
    }

    /// A file whose absence yields no properties.
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self::new(path, true)
    }

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

impl PropertySource for FileSource {
    fn read(&self) -> Result<PropertyMap, SourceError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if self.ignore_not_found && e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "Optional property file not found");
                return Ok(PropertyMap::new());
            }
            Err(source) => {
                return Err(SourceError::FileRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        parse_properties(&content, &self.path)
    }

    fn name(&self) -> String {
        format!("file[{}]", self.path.display())
    }
}

/// Parse properties file content. `path` is only used for error context.
pub(crate) fn parse_properties(content: &str, path: &Path) -> Result<PropertyMap, SourceError> {
    let mut properties = PropertyMap::new();
    let mut logical = String::new();
    let mut start_line = 0;

    for (index, raw) in content.lines().enumerate() {
        let line = if logical.is_empty() {
            start_line = index + 1;
            let trimmed = raw.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            trimmed
        } else {
            raw.trim_start()
        };

        if let Some(continued) = strip_continuation(line) {
            logical.push_str(continued);
            continue;
        }
        logical.push_str(line);

        let (key, value) = split_entry(&logical);
        if key.is_empty() {
            return Err(SourceError::FileParse {
                path: path.to_path_buf(),
                line: start_line,
                message: "entry has an empty key".to_string(),
            });
        }
        properties.insert(key.to_string(), Property::new(value));
        logical.clear();
    }

    if !logical.is_empty() {
        return Err(SourceError::FileParse {
            path: path.to_path_buf(),
            line: start_line,
            message: "line continuation at end of file".to_string(),
        });
    }

    Ok(properties)
}

/// Returns the line without its continuation marker, if it has one.
///
/// An even number of trailing backslashes is a run of escaped backslashes, not a continuation.
fn strip_continuation(line: &str) -> Option<&str> {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    if trailing % 2 == 1 {
        Some(&line[..line.len() - 1])
    } else {
        None
    }
}

fn split_entry(entry: &str) -> (&str, &str) {
    match entry.find(['=', ':', ' ', '\t']) {
        Some(pos) => {
            let key = entry[..pos].trim();
            let mut rest = entry[pos..].trim_start();
            // Whitespace may be followed by an explicit separator: `key = value`.
            if let Some(stripped) = rest.strip_prefix(['=', ':']) {
                rest = stripped;
            }
            (key, rest.trim())
        }
        None => (entry.trim(), ""),
    }
}
