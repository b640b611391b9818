//! Tests for source priority and registration-order precedence.

use crate::error::{ConfigError, SourceError};
use crate::loader::builder::ConfigBuilder;
use crate::source::{FileSource, ProgrammaticSource, PropertySource};
use crate::types::PropertyMap;

struct Unreachable;

impl PropertySource for Unreachable {
    fn read(&self) -> Result<PropertyMap, SourceError> {
        Err(SourceError::Custom("connection refused".to_string()))
    }

    fn name(&self) -> String {
        "remote".to_string()
    }
}

#[test]
fn test_custom_priority_beats_default() {
    let config = ConfigBuilder::new()
        .add_source_with_priority(ProgrammaticSource::new().add("one", "high"), 10)
        .add_source(ProgrammaticSource::new().add("one", "default"))
        .build()
        .unwrap();

    assert_eq!(config.get("one"), Some("high"));
}

#[test]
fn test_lower_priority_registered_last_still_loses() {
    let config = ConfigBuilder::new()
        .add_source(ProgrammaticSource::new().add("one", "default"))
        .add_source_with_priority(ProgrammaticSource::new().add("one", "low"), -1)
        .build()
        .unwrap();

    assert_eq!(config.get("one"), Some("default"));
}

#[test]
fn test_same_priority_later_registration_wins() {
    let config = ConfigBuilder::new()
        .add_source(
            ProgrammaticSource::new()
                .add("TEST_FULL_1", "300")
                .add("400", "300"),
        )
        .add_source(ProgrammaticSource::new().add("TEST_FULL_1", "100"))
        .build()
        .unwrap();

    assert_eq!(config.get("TEST_FULL_1"), Some("100"));
    assert_eq!(config.get("400"), Some("300"));
}

#[test]
fn test_highest_priority_wins_regardless_of_order() {
    let config = ConfigBuilder::new()
        .add_highest_priority_source(ProgrammaticSource::new().add("one", "high"))
        .add_source_with_priority(ProgrammaticSource::new().add("one", "max"), i32::MAX)
        .add_source(ProgrammaticSource::new().add("one", "default"))
        .build()
        .unwrap();

    assert_eq!(config.get("one"), Some("high"));
}

#[test]
fn test_multiple_highest_sources_tie_break_by_registration() {
    let config = ConfigBuilder::new()
        .add_highest_priority_source(ProgrammaticSource::new().add("one", "first"))
        .add_highest_priority_source(ProgrammaticSource::new().add("one", "second"))
        .build()
        .unwrap();

    assert_eq!(config.get("one"), Some("second"));
}

#[test]
fn test_inline_properties_take_slot_of_first_add() {
    // Inline values register before the later source, which therefore wins.
    let config = ConfigBuilder::new()
        .add("shared", "inline")
        .add_source(ProgrammaticSource::new().add("shared", "source"))
        .add("only_inline", "yes")
        .build()
        .unwrap();

    assert_eq!(config.get("shared"), Some("source"));
    assert_eq!(config.get("only_inline"), Some("yes"));

    // Registered after the source, the inline values win instead.
    let config = ConfigBuilder::new()
        .add_source(ProgrammaticSource::new().add("shared", "source"))
        .add("shared", "inline")
        .build()
        .unwrap();

    assert_eq!(config.get("shared"), Some("inline"));
}

#[test]
fn test_required_source_failure_aborts_build() {
    let result = ConfigBuilder::new()
        .add("key", "value")
        .add_source(Unreachable)
        .build();

    match result {
        Err(ConfigError::SourceRead {
            source_name,
            source: SourceError::Custom(message),
        }) => {
            assert_eq!(source_name, "remote");
            assert_eq!(message, "connection refused");
        }
        other => panic!("expected SourceRead, got {:?}", other),
    }
}

#[test]
fn test_optional_missing_file_is_ignored() {
    let config = ConfigBuilder::new()
        .add("key", "value")
        .add_source(FileSource::optional("NOT VALID PATH"))
        .build()
        .unwrap();

    assert!(config.exists("key"));
    assert_eq!(config.len(), 1);
}

#[test]
fn test_required_missing_file_fails() {
    let result = ConfigBuilder::new().add_file("NOT VALID PATH", false).build();

    match result {
        Err(ConfigError::SourceRead { source, .. }) => assert!(source.is_not_found()),
        other => panic!("expected SourceRead, got {:?}", other),
    }
}

#[test]
fn test_source_failure_takes_precedence_over_resolution_failure() {
    let result = ConfigBuilder::new()
        .add("key", "${missing}")
        .add_source(Unreachable)
        .build();

    assert!(matches!(result, Err(ConfigError::SourceRead { .. })));
}

#[test]
fn test_empty_builder_builds_empty_configuration() {
    let config = ConfigBuilder::new().build().unwrap();
    assert!(config.is_empty());
}
