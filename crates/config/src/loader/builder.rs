//! Configuration builder implementation.
//!
//! Responsibilities:
//! - Collect property source registrations with their priorities.
//! - Hold resolver configuration (delimiters, unresolved-placeholder policy).
//! - Drive aggregation then resolution and return the frozen `Properties`.
//!
//! Does NOT handle:
//! - Reading sources (delegated to `PropertySource` implementations).
//! - Merge ordering (delegated to aggregate.rs).
//! - Placeholder expansion (delegated to resolve.rs).
//!
//! Invariants / Assumptions:
//! - `build()` consumes the builder; each builder produces at most one configuration.
//! - Aggregation failures are reported before any resolution is attempted.
//! - A failed build returns only an error, never a partial configuration.

use std::path::PathBuf;

use super::aggregate::{PrioritizedSource, aggregate};
use super::resolve::Resolver;
use crate::error::ConfigError;
use crate::properties::Properties;
use crate::source::{EnvSource, FileSource, ProgrammaticSource, PropertySource};
use crate::types::{Delimiters, Priority, Property};

/// Builder assembling a configuration from prioritized property sources.
pub struct ConfigBuilder {
    registrations: Vec<PrioritizedSource>,
    /// Properties added with `add()`, and the registration slot they occupy.
    inline: Option<(usize, ProgrammaticSource)>,
    delimiters: Delimiters,
    ignore_unresolved: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    /// Create a builder with default delimiters and the strict placeholder policy.
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            inline: None,
            delimiters: Delimiters::default(),
            ignore_unresolved: false,
        }
    }

    /// Register a source with the default priority.
    pub fn add_source<S: PropertySource + 'static>(self, source: S) -> Self {
        self.register(Box::new(source), Priority::default())
    }

    /// Register a source with an explicit priority. Higher priority wins on key collision.
    pub fn add_source_with_priority<S: PropertySource + 'static>(
        self,
        source: S,
        priority: i32,
    ) -> Self {
        self.register(Box::new(source), Priority::Value(priority))
    }

    /// Register a source whose keys win over every other registration.
    pub fn add_highest_priority_source<S: PropertySource + 'static>(self, source: S) -> Self {
        self.register(Box::new(source), Priority::Highest)
    }

    /// Register an already boxed source with any priority.
    pub fn register(mut self, source: Box<dyn PropertySource>, priority: Priority) -> Self {
        self.registrations
            .push(PrioritizedSource::new(source, priority));
        self
    }

    /// Add a single property.
    ///
    /// All properties added this way form one programmatic source with the default
    /// priority, registered at the position of the first `add` call.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let slot = self.registrations.len();
        let (_, source) = self
            .inline
            .get_or_insert_with(|| (slot, ProgrammaticSource::new()));
        source.insert(key, Property::new(value));
        self
    }

    /// Register a `.properties` file with the default priority.
    ///
    /// With `ignore_not_found`, a missing file contributes no properties instead of failing the build.
    pub fn add_file(self, path: impl Into<PathBuf>, ignore_not_found: bool) -> Self {
        self.add_source(FileSource::new(path, ignore_not_found))
    }

    /// Register an environment snapshot of variables starting with `prefix`.
    pub fn add_env(self, prefix: impl Into<String>) -> Self {
        self.add_source(EnvSource::new(prefix))
    }

    /// Set custom placeholder delimiters.
    pub fn delimiters(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.delimiters = Delimiters::new(start, end);
        self
    }

    /// Leave placeholders referencing undefined keys verbatim instead of failing.
    pub fn ignore_unresolvable_placeholders(mut self, ignore: bool) -> Self {
        self.ignore_unresolved = ignore;
        self
    }

    /// Number of registered sources, counting inline properties as one.
    pub fn source_count(&self) -> usize {
        self.registrations.len() + usize::from(self.inline.is_some())
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidDelimiters` if the configured delimiters are unusable.
    /// - `ConfigError::SourceRead` if a required source cannot be read.
    /// - `ConfigError::UnresolvablePlaceholder` / `CyclicPlaceholder` / `ExpansionLimit`
    ///   if placeholder resolution fails.
    pub fn build(self) -> Result<Properties, ConfigError> {
        let span = tracing::debug_span!("build_config", sources = self.source_count());
        let _enter = span.enter();

        let resolver = Resolver::new(self.delimiters, self.ignore_unresolved)?;

        let mut registrations = self.registrations;
        if let Some((slot, source)) = self.inline {
            registrations.insert(
                slot,
                PrioritizedSource::new(Box::new(source), Priority::default()),
            );
        }

        tracing::debug!(count = registrations.len(), "Aggregating property sources");
        let merged = aggregate(&registrations)?;

        tracing::debug!(keys = merged.len(), "Resolving placeholders");
        let resolved = resolver.resolve(&merged)?;

        tracing::info!(keys = resolved.len(), "Configuration built");
        Ok(Properties::new(resolved))
    }
}
