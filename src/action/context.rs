// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CI event context, read from the environment the action sets up.

use crate::config::RulesConfig;
use crate::error::{ConfigError, LcError, Result};
use crate::rules::{is_merge_commit, ValidationInput};

/// The CI event that triggered the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Commits pushed to a branch.
    Push,
    /// A pull request was opened, edited or synchronized.
    PullRequest,
}

impl std::str::FromStr for EventKind {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "push" => Ok(EventKind::Push),
            "pull_request" | "pull_request_target" => Ok(EventKind::PullRequest),
            _ => Err(()),
        }
    }
}

/// Everything the check needs to know about the triggering event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    /// Event type.
    pub event: EventKind,
    /// Head commit message, for push events.
    pub commit_message: String,
    /// Pull request description.
    pub pr_body: String,
    /// Pull request title.
    pub pr_title: String,
    /// Pull request number.
    pub pr_number: Option<u64>,
    /// `owner/name` of the repository.
    pub repository: Option<String>,
}

/// What to validate for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// Validate this input.
    Input(ValidationInput),
    /// Validate a PR title with the commit-message rule.
    Title(String),
    /// Nothing to validate; the run passes.
    Skipped { reason: String },
}

impl EventContext {
    /// Read the context from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the context through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let event_name = get("EVENT_NAME")
            .or_else(|| get("GITHUB_EVENT_NAME"))
            .ok_or_else(|| {
                LcError::Config(ConfigError::MissingRequired {
                    key: "EVENT_NAME".to_string(),
                })
            })?;

        let event = event_name.parse::<EventKind>().map_err(|_| {
            LcError::Config(ConfigError::InvalidValue {
                key: "EVENT_NAME".to_string(),
                message: format!(
                    "unsupported event '{}' (expected push or pull_request)",
                    event_name
                ),
            })
        })?;

        let pr_number = get("PR_NUMBER").and_then(|raw| match raw.parse::<u64>() {
            Ok(number) => Some(number),
            Err(_) => {
                tracing::warn!("Ignoring unparsable PR_NUMBER '{}'", raw);
                None
            }
        });

        // GitHub renders a missing body as the literal string "None".
        let pr_body = get("PR_BODY").filter(|body| body != "None").unwrap_or_default();

        Ok(Self {
            event,
            commit_message: get("COMMIT_MSG").unwrap_or_default(),
            pr_body,
            pr_title: get("PR_TITLE").unwrap_or_default(),
            pr_number,
            repository: get("GITHUB_REPOSITORY"),
        })
    }

    /// Decide what to validate for this event.
    pub fn subject(&self, rules: &RulesConfig) -> Subject {
        match self.event {
            EventKind::Push => Subject::for_commit(&self.commit_message, rules),
            EventKind::PullRequest => Subject::for_pr(&self.pr_body, &self.pr_title, rules),
        }
    }
}

impl Subject {
    /// A commit message, or a skip when it is a merge commit.
    pub fn for_commit(message: &str, rules: &RulesConfig) -> Self {
        if rules.skip_merge_commits && is_merge_commit(message, &rules.merge_prefixes) {
            let first = message.lines().next().unwrap_or_default();
            return Subject::Skipped {
                reason: format!("merge commit: {}", first),
            };
        }
        Subject::Input(ValidationInput::commit(message))
    }

    /// A PR description, or its title when the description is empty and
    /// `pr_title_fallback` is on.
    pub fn for_pr(body: &str, title: &str, rules: &RulesConfig) -> Self {
        if rules.pr_title_fallback && body.trim().is_empty() && !title.trim().is_empty() {
            return Subject::Title(title.to_string());
        }
        Subject::Input(ValidationInput::pull_request(body))
    }
}
