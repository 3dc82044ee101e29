//! Error types for rigup operations.
//!
//! This module defines [`RigupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Prerequisite errors (configuration, platform, network, credentials)
//!   abort before any provisioning step runs and map to exit code 2
//! - Step failures never surface as errors; the executor captures them
//!   into a `StepResult`
//! - Use `anyhow::Error` (via `RigupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rigup operations.
#[derive(Debug, Error)]
pub enum RigupError {
    /// No configuration file at any of the searched locations.
    #[error("configuration not found (searched {searched})")]
    ConfigNotFound { searched: String },

    /// Failed to parse a configuration file.
    #[error("failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// The host is not a macOS machine.
    #[error("unsupported platform: {message}")]
    UnsupportedPlatform { message: String },

    /// Network connectivity could not be verified.
    #[error("network unavailable: {message}")]
    NoNetwork { message: String },

    /// An external command exited with a failure status.
    #[error("command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The operator could not be granted administrator privileges.
    #[error("failed to acquire administrator privileges")]
    PrivilegeDenied,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RigupError {
    /// Whether this error is a prerequisite failure that must abort the
    /// whole program before any step runs (exit code 2).
    pub fn is_prerequisite(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParse { .. }
                | Self::ConfigValidation { .. }
                | Self::UnsupportedPlatform { .. }
                | Self::NoNetwork { .. }
                | Self::PrivilegeDenied
        )
    }
}

/// Result type alias for rigup operations.
pub type Result<T> = std::result::Result<T, RigupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_searched_locations() {
        let err = RigupError::ConfigNotFound {
            searched: "./rigup.yml, ~/.config/rigup/config.yml".into(),
        };
        assert!(err.to_string().contains("./rigup.yml"));
    }

    #[test]
    fn config_parse_displays_path_and_message() {
        let err = RigupError::ConfigParse {
            path: PathBuf::from("/cfg/rigup.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/cfg/rigup.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = RigupError::CommandFailed {
            command: "brew install git".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("brew install git"));
        assert!(msg.contains('1'));
    }

    #[test]
    fn prerequisite_classification() {
        assert!(RigupError::ConfigNotFound {
            searched: "x".into()
        }
        .is_prerequisite());
        assert!(RigupError::UnsupportedPlatform {
            message: "not macOS".into()
        }
        .is_prerequisite());
        assert!(RigupError::NoNetwork {
            message: "offline".into()
        }
        .is_prerequisite());
        assert!(RigupError::PrivilegeDenied.is_prerequisite());

        assert!(!RigupError::CommandFailed {
            command: "brew".into(),
            code: Some(1)
        }
        .is_prerequisite());
        assert!(!RigupError::Other(anyhow::anyhow!("boom")).is_prerequisite());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RigupError = io_err.into();
        assert!(matches!(err, RigupError::Io(_)));
    }
}
