//! Error types for Preflight operations.
//!
//! This module defines [`PreflightError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Checks come in two tiers. Trapped checks (network probes, the Docker
//! availability query) collapse any failure into a boolean `false` in their
//! own signatures and never surface an error. Untrapped checks (subprocess
//! queries, filesystem reads, version parsing) return a [`Result`] and
//! propagate with `?`, aborting the remaining report.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Preflight operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Shell command failed to spawn or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A version string or version requirement could not be parsed.
    #[error("Failed to parse version '{value}': {message}")]
    VersionParse { value: String, message: String },

    /// The OS version descriptor did not contain the expected entries.
    #[error("Malformed version descriptor at {path}")]
    MalformedVersionDescriptor { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = PreflightError::CommandFailed {
            command: "git status --porcelain".into(),
            code: Some(128),
        };
        let msg = err.to_string();
        assert!(msg.contains("git status --porcelain"));
        assert!(msg.contains("128"));
    }

    #[test]
    fn version_parse_displays_value_and_message() {
        let err = PreflightError::VersionParse {
            value: "not-a-version".into(),
            message: "unexpected character".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not-a-version"));
        assert!(msg.contains("unexpected character"));
    }

    #[test]
    fn malformed_descriptor_displays_path() {
        let err = PreflightError::MalformedVersionDescriptor {
            path: PathBuf::from("/System/Library/CoreServices/SystemVersion.plist"),
        };
        assert!(err.to_string().contains("SystemVersion.plist"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PreflightError = io_err.into();
        assert!(matches!(err, PreflightError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PreflightError::CommandFailed {
                command: "false".into(),
                code: Some(1),
            })
        }
        assert!(returns_error().is_err());
    }
}
