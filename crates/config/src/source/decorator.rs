//! Key-transforming decorators.
//!
//! A decorator owns an inner source and rewrites the keys it produces. It takes no
//! part in priority or merge logic: the aggregator only sees the rewritten output.
//!
//! When two original keys map to the same rewritten key, the original key that
//! sorts last wins, so the outcome does not depend on hash map iteration order.

use crate::error::SourceError;
use crate::types::PropertyMap;

use super::PropertySource;

fn rewrite_keys(input: PropertyMap, rewrite: impl Fn(&str) -> String) -> PropertyMap {
    let mut entries: Vec<_> = input.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
        .into_iter()
        .map(|(key, property)| (rewrite(&key), property))
        .collect()
}

/// Lower-cases every key of the inner source.
#[derive(Debug, Clone)]
pub struct LowerCaseKeys<S> {
    inner: S,
}

impl<S: PropertySource> LowerCaseKeys<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PropertySource> PropertySource for LowerCaseKeys<S> {
    fn read(&self) -> Result<PropertyMap, SourceError> {
        Ok(rewrite_keys(self.inner.read()?, str::to_lowercase))
    }

    fn name(&self) -> String {
        format!("lowercase({})", self.inner.name())
    }
}

/// Replaces every occurrence of a substring in the keys of the inner source.
#[derive(Debug, Clone)]
pub struct KeyReplace<S> {
    inner: S,
    from: String,
    to: String,
}

impl<S: PropertySource> KeyReplace<S> {
    pub fn new(inner: S, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            inner,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PropertySource> PropertySource for KeyReplace<S> {
    fn read(&self) -> Result<PropertyMap, SourceError> {
        let properties = self.inner.read()?;
        // An empty pattern would insert `to` between every character.
        if self.from.is_empty() {
            return Ok(properties);
        }
        Ok(rewrite_keys(properties, |key| {
            key.replace(&self.from, &self.to)
        }))
    }

    fn name(&self) -> String {
        format!("replace[{}->{}]({})", self.from, self.to, self.inner.name())
    }
}
