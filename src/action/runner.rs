// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Runs one check: validate, optionally verify the ticket, report.

use crate::config::GitHubConfig;
use crate::error::{LcError, Result};
use crate::github::{render_comment, CommentSink, PullRequestRef};
use crate::linear::{LinearIssue, TicketLookup};
use crate::rules::{RuleEngine, ValidationResult, Violation, ViolationKind};

use super::context::{EventContext, EventKind, Subject};

/// Result of a complete check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// What was checked, e.g. `Commit Message`.
    pub source: String,
    /// The verdict.
    pub result: ValidationResult,
    /// The Linear issue, when the ticket was verified.
    pub issue: Option<LinearIssue>,
}

impl Report {
    /// Whether the check passed.
    pub fn passed(&self) -> bool {
        self.result.passed
    }
}

/// Validates a subject and, when a lookup is configured, verifies its ticket.
pub struct Checker<'a> {
    engine: &'a RuleEngine,
    lookup: Option<&'a dyn TicketLookup>,
}

impl<'a> Checker<'a> {
    /// Create a checker. Without a lookup only the format is checked.
    pub fn new(engine: &'a RuleEngine, lookup: Option<&'a dyn TicketLookup>) -> Self {
        Self { engine, lookup }
    }

    /// Check a subject. Linear being unreachable is an error, never a pass.
    pub fn check(&self, subject: &Subject) -> Result<Report> {
        let (source, result) = match subject {
            Subject::Skipped { reason } => {
                tracing::info!("Skipping validation: {}", reason);
                return Ok(Report {
                    source: "Commit Message".to_string(),
                    result: ValidationResult::skipped(),
                    issue: None,
                });
            }
            Subject::Input(input) => (input.source(), self.engine.validate(input)),
            Subject::Title(title) => ("PR Title", self.engine.validate_title(title)),
        };

        let mut report = Report {
            source: source.to_string(),
            result,
            issue: None,
        };

        let (Some(lookup), Some(ticket)) = (self.lookup, report.result.ticket.clone()) else {
            return Ok(report);
        };

        match lookup.lookup(&ticket)? {
            Some(issue) => {
                tracing::info!(
                    "Verified ticket {} exists: {}",
                    ticket,
                    issue.title.as_deref().unwrap_or("(untitled)")
                );
                report.issue = Some(issue);
            }
            None => {
                report.result = ValidationResult::fail(Violation {
                    kind: ViolationKind::TicketNotFound,
                    message: format!("Ticket {} was not found in Linear.", ticket),
                    suggestion: Some("Please check the ID.".to_string()),
                    line: Some(1),
                });
            }
        }

        Ok(report)
    }
}

/// Post the failure reason on the pull request, if the event allows it.
///
/// Returns whether a comment was posted. Posting problems are logged and
/// never change the verdict.
pub fn notify(
    report: &Report,
    context: &EventContext,
    config: &GitHubConfig,
    sink: Option<&dyn CommentSink>,
) -> bool {
    let Some(reason) = report.result.reason.as_deref() else {
        return false;
    };
    post(
        context,
        config,
        sink,
        &config.comment_template,
        reason,
        &report.source,
    )
}

/// Tell the author why the check could not run when Linear failed.
///
/// Only Linear errors are reported this way; configuration and other
/// errors are the workflow owner's to fix and are left to the job log.
pub fn notify_error(
    error: &LcError,
    context: &EventContext,
    config: &GitHubConfig,
    sink: Option<&dyn CommentSink>,
) -> bool {
    let LcError::Linear(linear) = error else {
        return false;
    };
    let reason = format!("Could not verify the ticket with Linear: {}", linear);
    post(context, config, sink, &config.error_template, &reason, "Linear")
}

fn post(
    context: &EventContext,
    config: &GitHubConfig,
    sink: Option<&dyn CommentSink>,
    template: &str,
    reason: &str,
    source: &str,
) -> bool {
    if !config.comment || context.event != EventKind::PullRequest {
        return false;
    }

    let (Some(sink), Some(repository), Some(number)) =
        (sink, context.repository.clone(), context.pr_number)
    else {
        tracing::debug!("No token or pull request details, not commenting");
        return false;
    };

    let body = match render_comment(template, reason, source) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Could not render PR comment: {}", e);
            return false;
        }
    };

    let target = PullRequestRef { repository, number };
    match sink.post_comment(&target, &body) {
        Ok(()) => {
            tracing::info!("Posted comment to {}#{}", target.repository, number);
            true
        }
        Err(e) => {
            tracing::warn!("Could not post comment to PR: {}", e);
            false
        }
    }
}
