//! Priority-ordered merge of property sources.
//!
//! Responsibilities:
//! - Order registered sources by (priority, registration index).
//! - Read every source and overwrite-merge their outputs into one map.
//!
//! Does NOT handle:
//! - Key normalization or filtering (decorator sources do that before merge).
//! - Placeholder expansion (see `resolve.rs`).
//!
//! Invariants:
//! - Sources are read sequentially, lowest priority first.
//! - On key collision the later-applied source wins, so higher priority wins and,
//!   within one priority, later registration wins.
//! - Any source read failure aborts the merge; no partial map is returned.

use crate::error::ConfigError;
use crate::source::PropertySource;
use crate::types::{Priority, PropertyMap};

/// A registered source together with its merge priority.
pub struct PrioritizedSource {
    source: Box<dyn PropertySource>,
    priority: Priority,
}

impl PrioritizedSource {
    pub fn new(source: Box<dyn PropertySource>, priority: Priority) -> Self {
        Self { source, priority }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn name(&self) -> String {
        self.source.name()
    }
}

impl std::fmt::Debug for PrioritizedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrioritizedSource")
            .field("source", &self.source.name())
            .field("priority", &self.priority)
            .finish()
    }
}

/// Merge `sources`, given in registration order, into a single property map.
pub fn aggregate(sources: &[PrioritizedSource]) -> Result<PropertyMap, ConfigError> {
    let mut ordered: Vec<&PrioritizedSource> = sources.iter().collect();
    // Stable sort keeps registration order among equal priorities.
    ordered.sort_by_key(|registration| registration.priority);

    let mut merged = PropertyMap::new();
    for registration in ordered {
        let source_name = registration.name();
        let properties = registration
            .source
            .read()
            .map_err(|source| ConfigError::SourceRead {
                source_name: source_name.clone(),
                source,
            })?;

        tracing::debug!(
            source = %source_name,
            priority = %registration.priority,
            count = properties.len(),
            "Merging property source"
        );

        for (key, property) in properties {
            if merged.contains_key(&key) {
                tracing::debug!(key = %key, source = %source_name, "Property overridden");
            }
            merged.insert(key, property);
        }
    }

    Ok(merged)
}
