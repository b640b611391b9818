//! Core data types shared by sources, the aggregator and the resolver.
//!
//! Responsibilities:
//! - Define `Property`, the unit of data every source produces.
//! - Define `Priority`, the ordering used to merge sources.
//! - Define `Delimiters`, the placeholder token boundaries.
//!
//! Invariants:
//! - `Priority::Highest` compares greater than every `Priority::Value`.
//! - `Delimiters` default to `${` / `}`.

use std::collections::HashMap;
use std::fmt;

use crate::constants::{DEFAULT_END_DELIMITER, DEFAULT_PRIORITY, DEFAULT_START_DELIMITER};

/// Mapping from key to property, as produced by a single source or by the merge.
pub type PropertyMap = HashMap<String, Property>;

/// A single configuration value together with its origin flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Raw text value. Never interpreted as anything but text by this crate.
    pub value: String,
    /// Whether the source set this value explicitly rather than as a default.
    pub explicit: bool,
}

impl Property {
    /// Create an explicitly set property.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            explicit: true,
        }
    }

    /// Create a property with a caller-supplied origin flag.
    pub fn with_explicit(value: impl Into<String>, explicit: bool) -> Self {
        Self {
            value: value.into(),
            explicit,
        }
    }
}

/// Merge priority of a registered source. Higher priority wins on key collision.
///
/// Variant order matters: the derived `Ord` ranks `Highest` above any `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// A user-assigned priority.
    Value(i32),
    /// Sentinel that outranks every user-assigned priority.
    Highest,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Value(DEFAULT_PRIORITY)
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Priority::Value(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Value(v) => write!(f, "{v}"),
            Priority::Highest => write!(f, "highest"),
        }
    }
}

/// Start and end strings bounding a placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub start: String,
    pub end: String,
}

impl Delimiters {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Wrap a key in these delimiters, producing its placeholder token.
    pub fn token(&self, key: &str) -> String {
        format!("{}{}{}", self.start, key, self.end)
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::new(DEFAULT_START_DELIMITER, DEFAULT_END_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_priority_outranks_every_value() {
        assert!(Priority::Highest > Priority::Value(i32::MAX));
        assert!(Priority::Value(i32::MAX) > Priority::Value(0));
        assert!(Priority::Value(-5) < Priority::default());
    }

    #[test]
    fn test_default_delimiters() {
        let delimiters = Delimiters::default();
        assert_eq!(delimiters.start, "${");
        assert_eq!(delimiters.end, "}");
        assert_eq!(delimiters.token("key1"), "${key1}");
    }

    #[test]
    fn test_property_constructors() {
        assert!(Property::new("v").explicit);
        assert!(!Property::with_explicit("v", false).explicit);
    }
}
