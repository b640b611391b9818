//! Centralized constants for the upconfig workspace.
//!
//! This module contains default values shared by the builder, the resolver
//! and the CLI to avoid magic value duplication.

// =============================================================================
// Priority Defaults
// =============================================================================

/// Priority assigned to sources registered without an explicit priority.
pub const DEFAULT_PRIORITY: i32 = 0;

// =============================================================================
// Placeholder Defaults
// =============================================================================

/// Default placeholder start delimiter.
pub const DEFAULT_START_DELIMITER: &str = "${";

/// Default placeholder end delimiter.
pub const DEFAULT_END_DELIMITER: &str = "}";

// =============================================================================
// Environment
// =============================================================================

/// Environment variable that disables `.env` loading for the CLI process.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
