// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::{ConfigOverrides, VerifyMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// linear-check - Linear ticket references for commits and pull requests
///
/// Run without a subcommand inside a GitHub Action to check the triggering
/// push or pull request.
#[derive(Parser, Debug)]
#[command(name = "linear-check")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Enforce Linear ticket references in commits and pull requests", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to run if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the ticket identifier pattern
    #[arg(long, global = true, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Override the minimum description length
    #[arg(long, global = true, value_name = "CHARS")]
    pub min_length: Option<usize>,

    /// When to verify tickets against Linear (auto, always, never)
    #[arg(long, global = true, value_parser = parse_verify_mode)]
    pub verify: Option<VerifyMode>,

    /// Check formatting only; never contact Linear
    #[arg(long, global = true)]
    pub offline: bool,

    /// Linear API key used to verify tickets
    #[arg(long, global = true, env = "LINEAR_API_KEY", hide_env_values = true)]
    pub linear_api_key: Option<String>,

    /// GitHub token used to comment on pull requests
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check the push or pull request described by the CI environment (default)
    Run,

    /// Validate a commit message
    Commit(CommitArgs),

    /// Validate a pull request description
    Pr(PrArgs),

    /// Print version information
    Version,

    /// Write an example configuration file
    Init(InitArgs),
}

/// Arguments for the commit command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CommitArgs {
    /// The commit message to validate
    #[arg(conflicts_with_all = ["file", "rev"])]
    pub message: Option<String>,

    /// Read the message from a file (`-` for stdin)
    #[arg(short, long, conflicts_with = "rev")]
    pub file: Option<PathBuf>,

    /// Read the message of an existing commit (default: HEAD)
    #[arg(long)]
    pub rev: Option<String>,
}

/// Arguments for the pr command.
#[derive(Parser, Debug, Default, Clone)]
pub struct PrArgs {
    /// The pull request description
    #[arg(long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the description from a file (`-` for stdin)
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    /// The pull request title, used when the description is empty and
    /// `rules.pr_title_fallback` is enabled
    #[arg(long)]
    pub title: Option<String>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Where to write the file
    #[arg(long, default_value = "linear-check.toml")]
    pub path: PathBuf,
}

fn parse_verify_mode(value: &str) -> Result<VerifyMode, String> {
    value
        .parse::<VerifyMode>()
        .map_err(|_| format!("invalid mode '{}' (expected auto, always or never)", value))
}

impl Cli {
    /// Get the effective command, defaulting to Run if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }

    /// Configuration overrides given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            ticket_pattern: self.pattern.clone(),
            min_description_length: self.min_length,
            offline: self.offline,
            verify: self.verify,
        }
    }

    /// The Linear API key, ignoring empty values from unset action inputs.
    pub fn linear_api_key(&self) -> Option<&str> {
        self.linear_api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    /// The GitHub token, ignoring empty values from unset action inputs.
    pub fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref().filter(|token| !token.trim().is_empty())
    }
}
