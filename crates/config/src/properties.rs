//! The resolved, immutable property set returned by a successful build.
//!
//! Responsibilities:
//! - Provide read-only lookup of resolved values by exact key.
//! - Provide thin typed access via `FromStr` for callers that need it.
//!
//! Invariants:
//! - No mutation API exists; a `Properties` value is frozen once built.
//! - Iteration order is sorted by key.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ConfigError;
use crate::types::{Property, PropertyMap};

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Properties {
    entries: PropertyMap,
}

impl Properties {
    pub(crate) fn new(entries: PropertyMap) -> Self {
        Self { entries }
    }

    /// Get the value for `key`, if defined.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|p| p.value.as_str())
    }

    /// Get the full property (value and origin flag) for `key`.
    pub fn get_property(&self, key: &str) -> Option<&Property> {
        self.entries.get(key)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the value for `key`, or `default` if it is not defined.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parse the value for `key` into `T`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the value does not parse.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(key)
            .map(|raw| {
                raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate over `(key, property)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter()
    }

    /// Sorted key to value map, without origin flags.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.value.clone()))
            .collect()
    }

    /// Borrow the underlying map, e.g. to resolve further text against it.
    pub fn as_map(&self) -> &PropertyMap {
        &self.entries
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, property) in self.iter() {
            map.serialize_entry(key, &property.value)?;
        }
        map.end()
    }
}
