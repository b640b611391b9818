//! Placeholder resolution over a merged property map.
//!
//! Responsibilities:
//! - Expand delimiter-bounded placeholder tokens with the resolved value of the referenced key.
//! - Resolve nested tokens innermost-first and referenced keys depth-first.
//! - Detect cyclic references and apply the unresolved-placeholder policy.
//!
//! Does NOT handle:
//! - Reading or merging sources (see `aggregate.rs`).
//! - Type conversion; values are text throughout.
//!
//! Invariants:
//! - Each key is resolved at most once per `resolve` call; results are memoised.
//! - A key reachable from its own value, directly or transitively, is a cycle error.
//! - Under the tolerant policy an unresolvable token is left verbatim and scanning continues after it.
//! - A value without tokens is returned unchanged, so resolving a resolved map is a no-op.
//! - Substitutions within one value never exceed the byte length of the text being resolved.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::types::{Delimiters, Property, PropertyMap};

/// Expands placeholders using a fixed delimiter pair and unresolved-token policy.
#[derive(Debug, Clone)]
pub struct Resolver {
    delimiters: Delimiters,
    ignore_unresolved: bool,
}

/// Per-call bookkeeping: the map being resolved, finished keys, and keys in flight.
struct Resolution<'a> {
    merged: &'a PropertyMap,
    resolved: HashMap<String, String>,
    in_progress: Vec<String>,
    /// Substitutions allowed while expanding one value.
    substitution_limit: usize,
}

/// Substitutions per value are capped at the byte length of all text being resolved.
///
/// Each token spans at least two bytes of that text.
fn substitution_limit(merged: &PropertyMap, extra: &str) -> usize {
    merged
        .values()
        .map(|property| property.value.len())
        .sum::<usize>()
        + extra.len()
}

impl Resolver {
    /// Create a resolver.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDelimiters` if either delimiter is empty, both are equal,
    /// or the start delimiter contains the end delimiter (no token could ever be recognised).
    pub fn new(delimiters: Delimiters, ignore_unresolved: bool) -> Result<Self, ConfigError> {
        if delimiters.start.is_empty() || delimiters.end.is_empty() {
            return Err(ConfigError::InvalidDelimiters {
                message: "start and end delimiters must not be empty".to_string(),
            });
        }
        if delimiters.start == delimiters.end {
            return Err(ConfigError::InvalidDelimiters {
                message: format!(
                    "start and end delimiters must differ (both are '{}')",
                    delimiters.start
                ),
            });
        }
        // The first end delimiter would always fall inside a start delimiter.
        if delimiters.start.contains(delimiters.end.as_str()) {
            return Err(ConfigError::InvalidDelimiters {
                message: format!(
                    "start delimiter '{}' must not contain end delimiter '{}'",
                    delimiters.start, delimiters.end
                ),
            });
        }
        Ok(Self {
            delimiters,
            ignore_unresolved,
        })
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn ignores_unresolved(&self) -> bool {
        self.ignore_unresolved
    }

    /// Resolve every value in `merged`.
    ///
    /// Keys are visited in sorted order so the reported error is deterministic.
    pub fn resolve(&self, merged: &PropertyMap) -> Result<PropertyMap, ConfigError> {
        let mut resolution = Resolution {
            merged,
            resolved: HashMap::with_capacity(merged.len()),
            in_progress: Vec::new(),
            substitution_limit: substitution_limit(merged, ""),
        };

        let mut keys: Vec<&String> = merged.keys().collect();
        keys.sort();
        for key in keys {
            self.resolve_key(key, &mut resolution)?;
        }

        let mut resolved = resolution.resolved;
        Ok(merged
            .iter()
            .map(|(key, property)| {
                let value = resolved
                    .remove(key)
                    .unwrap_or_else(|| property.value.clone());
                (key.clone(), Property::with_explicit(value, property.explicit))
            })
            .collect())
    }

    /// Expand the placeholders of a standalone `text` against `properties`.
    pub fn resolve_value(&self, properties: &PropertyMap, text: &str) -> Result<String, ConfigError> {
        let mut resolution = Resolution {
            merged: properties,
            resolved: HashMap::new(),
            in_progress: Vec::new(),
            substitution_limit: substitution_limit(properties, text),
        };
        self.expand(text, text, &mut resolution)
    }

    fn resolve_key(&self, key: &str, resolution: &mut Resolution<'_>) -> Result<String, ConfigError> {
        if let Some(value) = resolution.resolved.get(key) {
            return Ok(value.clone());
        }

        if let Some(pos) = resolution.in_progress.iter().position(|k| k == key) {
            let mut chain = resolution.in_progress[pos..].to_vec();
            chain.push(key.to_string());
            return Err(ConfigError::CyclicPlaceholder {
                key: key.to_string(),
                chain,
            });
        }

        let merged = resolution.merged;
        let Some(property) = merged.get(key) else {
            return Err(ConfigError::UnresolvablePlaceholder {
                key: key.to_string(),
                referenced_by: key.to_string(),
            });
        };

        resolution.in_progress.push(key.to_string());
        let expanded = self.expand(key, &property.value, resolution);
        resolution.in_progress.pop();
        let expanded = expanded?;

        resolution
            .resolved
            .insert(key.to_string(), expanded.clone());
        Ok(expanded)
    }

    /// Expand every token in `raw`. `owner` names the value in error reports.
    fn expand(
        &self,
        owner: &str,
        raw: &str,
        resolution: &mut Resolution<'_>,
    ) -> Result<String, ConfigError> {
        let start = self.delimiters.start.as_str();
        let end = self.delimiters.end.as_str();

        let mut text = raw.to_string();
        // Bytes before `cursor` hold no token that can still be resolved.
        let mut cursor = 0;
        let mut substitutions = 0;

        while let Some(offset) = text[cursor..].find(end) {
            let end_pos = cursor + offset;
            let token_end = end_pos + end.len();

            // The innermost token closes at the first end delimiter and opens at the
            // last start delimiter before it.
            let Some(start_pos) = text[cursor..end_pos].rfind(start).map(|p| cursor + p) else {
                cursor = token_end;
                continue;
            };

            let name = &text[start_pos + start.len()..end_pos];
            if !resolution.merged.contains_key(name) {
                if self.ignore_unresolved {
                    tracing::debug!(key = %name, owner = %owner, "Leaving unresolved placeholder");
                    cursor = token_end;
                    continue;
                }
                return Err(ConfigError::UnresolvablePlaceholder {
                    key: name.to_string(),
                    referenced_by: owner.to_string(),
                });
            }

            substitutions += 1;
            if substitutions > resolution.substitution_limit {
                return Err(ConfigError::ExpansionLimit {
                    key: owner.to_string(),
                    limit: resolution.substitution_limit,
                });
            }

            let name = name.to_string();
            let value = self.resolve_key(&name, resolution)?;
            text.replace_range(start_pos..token_end, &value);
        }

        Ok(text)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            delimiters: Delimiters::default(),
            ignore_unresolved: false,
        }
    }
}
