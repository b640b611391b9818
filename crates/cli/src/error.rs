//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use upconfig::ConfigError;

/// Structured exit codes for upconfig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration built and printed.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A required source could not be read.
    ///
    /// Scripts should check file paths and permissions.
    SourceError = 2,

    /// Placeholder resolution failed (unresolvable, cyclic, or invalid delimiters).
    ///
    /// Scripts should fix the property values; retrying will not help.
    ResolutionError = 3,

    /// The requested key is not defined.
    NotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::SourceRead { .. } => ExitCode::SourceError,
            ConfigError::UnresolvablePlaceholder { .. }
            | ConfigError::CyclicPlaceholder { .. }
            | ConfigError::ExpansionLimit { .. }
            | ConfigError::InvalidDelimiters { .. } => ExitCode::ResolutionError,
            ConfigError::InvalidValue { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::SourceError.as_i32(), 2);
        assert_eq!(ExitCode::ResolutionError.as_i32(), 3);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
    }

    #[test]
    fn test_config_error_mapping() {
        let err = ConfigError::CyclicPlaceholder {
            key: "a".to_string(),
            chain: vec!["a".to_string(), "a".to_string()],
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ResolutionError);

        let err = ConfigError::SourceRead {
            source_name: "file[x]".to_string(),
            source: upconfig::SourceError::Custom("boom".to_string()),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::SourceError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let result: Result<(), ConfigError> = Err(ConfigError::UnresolvablePlaceholder {
            key: "missing".to_string(),
            referenced_by: "a".to_string(),
        });
        let err = result.context("Failed to build configuration").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ResolutionError);

        let err = anyhow::anyhow!("unrelated");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
