// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! linear-check - Linear ticket references for commits and pull requests
//!
//! A CI check, packaged as a GitHub Action, that refuses commits and pull
//! requests which do not lead with a Linear ticket.
//!
//! # Rules
//!
//! - **Commit messages** start with `TICKET-123:` followed by a description
//!   of at least ten characters.
//! - **PR descriptions** open with such a line; every later line is blank,
//!   a `*` bullet, or another ticket line.
//! - **Ticket verification** optionally confirms the ticket exists in Linear.
//!
//! # Example
//!
//! ```
//! use linear_check::rules::{RuleEngine, ValidationInput, ViolationKind};
//!
//! let engine = RuleEngine::default();
//!
//! let result = engine.validate(&ValidationInput::commit("ABC-123: fix the login bug"));
//! assert!(result.passed);
//!
//! let result = engine.validate(&ValidationInput::pull_request("* notes\nABC-123: add paging"));
//! assert_eq!(result.kind(), Some(ViolationKind::InvalidFirstLine));
//! ```

// Module declarations
pub mod action;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod linear;
pub mod rules;

// Re-exports for convenience
pub use config::LcConfig;
pub use error::{LcError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of linear-check.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// The nearest release tag at compile time (if available).
    pub const GIT_DESCRIBE: Option<&str> = option_env!("VERGEN_GIT_DESCRIBE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let short = |sha: &str| sha[..7.min(sha.len())].to_string();
        match (GIT_DESCRIBE, GIT_SHA, GIT_COMMIT_DATE) {
            (Some(tag), Some(sha), _) => format!("{} ({} {})", VERSION, tag, short(sha)),
            (None, Some(sha), Some(date)) => format!("{} ({} {})", VERSION, short(sha), date),
            (None, Some(sha), None) => format!("{} ({})", VERSION, short(sha)),
            _ => VERSION.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_version_string_starts_with_version() {
            assert!(version_string().starts_with(VERSION));
        }
    }
}
