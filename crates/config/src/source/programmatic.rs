//! In-memory source populated by code.

use crate::error::SourceError;
use crate::types::{Property, PropertyMap};

use super::PropertySource;

/// A source whose properties are supplied programmatically.
///
/// Later additions of the same key replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ProgrammaticSource {
    properties: PropertyMap,
}

impl ProgrammaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an explicitly set value.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, Property::new(value));
        self
    }

    /// Add a property with a caller-supplied origin flag.
    pub fn add_property(mut self, key: impl Into<String>, property: Property) -> Self {
        self.insert(key, property);
        self
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, property: Property) {
        self.properties.insert(key.into(), property);
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertySource for ProgrammaticSource {
    fn read(&self) -> Result<PropertyMap, SourceError> {
        Ok(self.properties.clone())
    }

    fn name(&self) -> String {
        "programmatic".to_string()
    }
}
