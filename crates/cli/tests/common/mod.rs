//! Shared test utilities for upconfig integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write property fixtures into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a hermetic `upconfig` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `UPCONFIG_*` variables are cleared so host settings cannot leak in.
pub fn upconfig_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("upconfig");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("UPCONFIG_ENV")
        .env_remove("UPCONFIG_ENV_PREFIX")
        .env_remove("UPCONFIG_START_DELIMITER")
        .env_remove("UPCONFIG_END_DELIMITER")
        .env_remove("UPCONFIG_IGNORE_UNRESOLVED")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `content` to `dir/name` and return the path.
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}
