// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for linear-check.
//!
//! These are the errors that make a run *fatal*: a broken configuration, an
//! unreachable Linear API, a missing credential. A commit or PR description
//! that breaks the formatting rules is not an error here; it is a failed
//! [`ValidationResult`](crate::rules::ValidationResult).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for linear-check operations.
#[derive(Error, Debug)]
pub enum LcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Linear API errors
    #[error("Linear error: {0}")]
    Linear(#[from] LinearError),

    // GitHub API errors
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Linear API errors.
///
/// Every variant fails the run closed; a ticket that simply does not exist is
/// reported as a validation failure instead.
#[derive(Error, Debug)]
pub enum LinearError {
    #[error("Request to Linear failed: {message}")]
    Transport { message: String },

    #[error("Linear request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Linear returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Linear API error or authentication failed: {response}")]
    Api { response: String },

    #[error("Unexpected response from Linear: {message}")]
    Decode { message: String },
}

/// GitHub API errors.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Request to GitHub failed: {message}")]
    Transport { message: String },

    #[error("GitHub returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Template error: {message}")]
    Template { message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },
}

/// Result type alias for linear-check operations.
pub type Result<T> = std::result::Result<T, LcError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LcError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/linear-check.toml"),
        };
        assert!(err.to_string().contains("/path/to/linear-check.toml"));
    }

    #[test]
    fn test_linear_timeout_display() {
        let err = LinearError::Timeout { seconds: 10 };
        assert_eq!(err.to_string(), "Linear request timed out after 10s");
    }

    #[test]
    fn test_lc_error_from_linear_error() {
        let err: LcError = LinearError::Api {
            response: "{\"errors\":[]}".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Linear error:"));
    }

    #[test]
    fn test_lc_error_from_io_error() {
        let err: LcError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into();
        assert!(matches!(err, LcError::Io(_)));
        assert_eq!(err.to_string(), "IO error: read-only");
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.context("read body").unwrap_err();
        assert_eq!(err.to_string(), "read body: missing");
    }
}
