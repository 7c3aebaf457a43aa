// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from
//! `linear-check.toml`. Credentials are deliberately absent: they only ever
//! come from the environment or the command line.

use serde::{Deserialize, Serialize};

/// Default ticket identifier pattern: uppercase team key, dash, number.
pub const DEFAULT_TICKET_PATTERN: &str = r"[A-Z]+-\d+";

/// Default minimum description length after the `ID:` prefix.
pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 10;

/// Default PR comment template.
pub const DEFAULT_COMMENT_TEMPLATE: &str = "❌ **Linear Ticket Check Failed**\n\n{{reason}}";

/// Default PR comment template when Linear could not be reached.
pub const DEFAULT_ERROR_TEMPLATE: &str =
    "⚠️ **Linear Ticket Check Could Not Run**\n\n{{reason}}";

/// The main configuration structure for linear-check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LcConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// Linear API configuration.
    pub linear: LinearConfig,

    /// GitHub API configuration.
    pub github: GitHubConfig,
}

impl LcConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Regular expression for a ticket identifier, without anchors.
    pub ticket_pattern: String,

    /// Minimum number of characters after the colon, once trimmed.
    pub min_description_length: usize,

    /// Prefix that marks a free-form line in a PR description.
    pub bullet_marker: String,

    /// Whether merge commits pass without validation on push events.
    pub skip_merge_commits: bool,

    /// Message prefixes that identify a merge commit.
    pub merge_prefixes: Vec<String>,

    /// Validate the PR title when the PR description is empty.
    pub pr_title_fallback: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            ticket_pattern: DEFAULT_TICKET_PATTERN.to_string(),
            min_description_length: DEFAULT_MIN_DESCRIPTION_LENGTH,
            bullet_marker: "*".to_string(),
            skip_merge_commits: true,
            merge_prefixes: vec!["Merge pull request".to_string(), "Merge branch".to_string()],
            pr_title_fallback: false,
        }
    }
}

/// When to look the extracted ticket up in Linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerifyMode {
    /// Verify only when an API key is available.
    #[default]
    Auto,
    /// Always verify; a missing API key is fatal.
    Always,
    /// Never contact Linear; format checks only.
    Never,
}

impl std::str::FromStr for VerifyMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(VerifyMode::Auto),
            "always" | "required" => Ok(VerifyMode::Always),
            "never" | "off" => Ok(VerifyMode::Never),
            _ => Err(()),
        }
    }
}

/// Linear API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearConfig {
    /// GraphQL endpoint.
    pub api_url: String,

    /// Verification mode.
    pub verify: VerifyMode,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.linear.app/graphql".to_string(),
            verify: VerifyMode::Auto,
            timeout_secs: 10,
        }
    }
}

/// GitHub API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL.
    pub api_url: String,

    /// Whether to comment on the pull request when the check fails.
    pub comment: bool,

    /// Handlebars template for the comment body; `{{reason}}` and
    /// `{{source}}` are available.
    pub comment_template: String,

    /// Template for the comment posted when Linear cannot be queried.
    pub error_template: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            comment: true,
            comment_template: DEFAULT_COMMENT_TEMPLATE.to_string(),
            error_template: DEFAULT_ERROR_TEMPLATE.to_string(),
            timeout_secs: 10,
        }
    }
}
