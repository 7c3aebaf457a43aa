// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation input and result types.

use crate::cli::args::OutputFormat;
use console::style;
use serde::Serialize;

use super::ticket::TicketReference;

/// The text being checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationInput {
    /// A single commit message.
    CommitMessage { text: String },
    /// The description of a pull request.
    PullRequestBody { text: String },
}

impl ValidationInput {
    /// Create a commit message input.
    pub fn commit(text: impl Into<String>) -> Self {
        ValidationInput::CommitMessage { text: text.into() }
    }

    /// Create a pull request body input.
    pub fn pull_request(text: impl Into<String>) -> Self {
        ValidationInput::PullRequestBody { text: text.into() }
    }

    /// The raw text.
    pub fn text(&self) -> &str {
        match self {
            ValidationInput::CommitMessage { text } | ValidationInput::PullRequestBody { text } => {
                text
            }
        }
    }

    /// Human-readable name of the source, used in failure reasons.
    pub fn source(&self) -> &'static str {
        match self {
            ValidationInput::CommitMessage { .. } => "Commit Message",
            ValidationInput::PullRequestBody { .. } => "PR Description",
        }
    }
}

/// Why a check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// No ticket identifier anywhere in the text.
    MissingTicketId,
    /// A ticket identifier exists but is not the leading `ID:` prefix.
    TicketIdMisplaced,
    /// The description after `ID:` is shorter than the minimum.
    DescriptionTooShort,
    /// The PR description has no non-blank line.
    EmptyBody,
    /// The first PR description line is not an `ID:` line.
    InvalidFirstLine,
    /// A PR description line is neither blank, a bullet, nor an `ID:` line.
    MalformedLine,
    /// The ticket is well-formed but Linear does not know it.
    TicketNotFound,
}

impl ViolationKind {
    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::MissingTicketId => "missing-ticket-id",
            ViolationKind::TicketIdMisplaced => "ticket-id-misplaced",
            ViolationKind::DescriptionTooShort => "description-too-short",
            ViolationKind::EmptyBody => "empty-body",
            ViolationKind::InvalidFirstLine => "invalid-first-line",
            ViolationKind::MalformedLine => "malformed-line",
            ViolationKind::TicketNotFound => "ticket-not-found",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The first rule violation found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Which rule was broken.
    pub kind: ViolationKind,
    /// Human-readable explanation.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// 1-based line number where the violation was found.
    pub line: Option<usize>,
}

/// Outcome of a single validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the input satisfied every rule.
    pub passed: bool,
    /// Failure reason, absent on success.
    pub reason: Option<String>,
    /// Structured failure, absent on success.
    pub violation: Option<Violation>,
    /// Ticket found on the leading line, present on success.
    pub ticket: Option<TicketReference>,
}

impl ValidationResult {
    /// A passing result.
    pub fn pass(ticket: &TicketReference) -> Self {
        Self {
            passed: true,
            reason: None,
            violation: None,
            ticket: Some(ticket.clone()),
        }
    }

    /// A passing result for input that was deliberately not checked.
    pub fn skipped() -> Self {
        Self {
            passed: true,
            reason: None,
            violation: None,
            ticket: None,
        }
    }

    /// A failing result. The reason combines the message and suggestion.
    pub fn fail(violation: Violation) -> Self {
        let reason = match violation.suggestion {
            Some(ref suggestion) => format!("{}\n\n{}", violation.message, suggestion),
            None => violation.message.clone(),
        };
        Self {
            passed: false,
            reason: Some(reason),
            violation: Some(violation),
            ticket: None,
        }
    }

    /// The ticket identifier, if the input passed.
    pub fn ticket_id(&self) -> Option<&str> {
        self.ticket.as_ref().map(TicketReference::as_str)
    }

    /// The violated rule, if any.
    pub fn kind(&self) -> Option<ViolationKind> {
        self.violation.as_ref().map(|v| v.kind)
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    fn print_text(&self) {
        match (&self.violation, &self.ticket) {
            (Some(violation), _) => {
                let location = violation
                    .line
                    .map(|l| format!(" (line {})", l))
                    .unwrap_or_default();
                println!(
                    "{} {}{} {}",
                    style("✗").red().bold(),
                    style(violation.kind.code()).red(),
                    location,
                    violation.message
                );
                if let Some(ref suggestion) = violation.suggestion {
                    println!("  {} {}", style("→").dim(), style(suggestion).dim());
                }
            }
            (None, Some(ticket)) => {
                println!(
                    "{} Found ticket {}",
                    style("✓").green().bold(),
                    style(ticket.as_str()).cyan()
                );
            }
            (None, None) => {
                println!("{} Skipped", style("✓").green().bold());
            }
        }
    }

    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(self).unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation() -> Violation {
        Violation {
            kind: ViolationKind::EmptyBody,
            message: "PR Description is empty.".to_string(),
            suggestion: Some("Start it with ENG-123: ...".to_string()),
            line: None,
        }
    }

    #[test]
    fn test_input_accessors() {
        let input = ValidationInput::commit("ENG-1: hello world!");
        assert_eq!(input.text(), "ENG-1: hello world!");
        assert_eq!(input.source(), "Commit Message");
        assert_eq!(
            ValidationInput::pull_request("").source(),
            "PR Description"
        );
    }

    #[test]
    fn test_fail_reason_includes_suggestion() {
        let result = ValidationResult::fail(violation());
        assert!(!result.passed);
        let reason = result.reason.unwrap();
        assert!(reason.starts_with("PR Description is empty."));
        assert!(reason.ends_with("Start it with ENG-123: ..."));
    }

    #[test]
    fn test_pass_has_no_reason() {
        let pattern = super::super::TicketPattern::default();
        let ticket = pattern.find("ENG-9").unwrap();
        let result = ValidationResult::pass(&ticket);
        assert!(result.passed);
        assert!(result.reason.is_none());
        assert_eq!(result.ticket_id(), Some("ENG-9"));
        assert_eq!(result.kind(), None);
    }

    #[test]
    fn test_json_shape() {
        let result = ValidationResult::fail(violation());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["passed"], false);
        assert_eq!(json["violation"]["kind"], "empty-body");
    }
}
