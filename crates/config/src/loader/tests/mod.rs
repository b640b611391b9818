//! Tests for the configuration builder.
//!
//! Responsibilities:
//! - Test priority ordering and tie-breaking across registered sources.
//! - Test placeholder resolution through the builder surface.
//! - Test environment and file sources wired through the builder.
//!
//! Does NOT handle:
//! - Source parsing details (tested next to each source).
//! - Resolver internals (tested in resolve.rs).
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod precedence_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
