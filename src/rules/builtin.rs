// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Every check here is a pure function of the text and the [`RuleSet`]; the
//! first violation found is the one reported.

use crate::config::RulesConfig;
use crate::error::{ConfigError, LcError, Result};

use super::ticket::{TicketLine, TicketPattern};
use super::validator::{ValidationInput, ValidationResult, Violation, ViolationKind};

/// Example shown to authors in failure messages.
const EXAMPLE: &str = "ENG-123: Detailed description here...";

/// The parameters every rule is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Ticket identifier pattern.
    pub pattern: TicketPattern,
    /// Minimum trimmed length of the text after `ID:` on the same line.
    pub min_description_length: usize,
    /// Prefix of a free-form PR description line.
    pub bullet_marker: String,
}

impl RuleSet {
    /// Build a rule set from configuration, compiling the ticket pattern.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        if config.bullet_marker.is_empty() {
            return Err(LcError::Config(ConfigError::InvalidValue {
                key: "rules.bullet_marker".to_string(),
                message: "marker must not be empty".to_string(),
            }));
        }

        Ok(Self {
            pattern: TicketPattern::compile(&config.ticket_pattern)?,
            min_description_length: config.min_description_length,
            bullet_marker: config.bullet_marker.clone(),
        })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            pattern: TicketPattern::default(),
            min_description_length: crate::config::DEFAULT_MIN_DESCRIPTION_LENGTH,
            bullet_marker: "*".to_string(),
        }
    }
}

/// Validate any input against the rule set.
pub fn validate(input: &ValidationInput, rules: &RuleSet) -> ValidationResult {
    match input {
        ValidationInput::CommitMessage { text } => check_commit_message(text, rules),
        ValidationInput::PullRequestBody { text } => check_pr_body(text, rules),
    }
}

/// Check a commit message: `ID: description` with nothing before the ID.
pub fn check_commit_message(text: &str, rules: &RuleSet) -> ValidationResult {
    check_ticket_text(text, "Commit Message", rules)
}

/// Check a single piece of text with the commit-message rule, naming the
/// source in failure messages.
pub fn check_ticket_text(text: &str, source: &str, rules: &RuleSet) -> ValidationResult {
    let Some(line) = rules.pattern.split_prefix(text) else {
        return ValidationResult::fail(missing_prefix(text, source, rules));
    };

    match check_description(&line, rules, None) {
        Some(violation) => ValidationResult::fail(violation),
        None => ValidationResult::pass(&line.ticket),
    }
}

/// Check a PR description line by line.
pub fn check_pr_body(text: &str, rules: &RuleSet) -> ValidationResult {
    if text.lines().all(|line| line.trim().is_empty()) {
        return ValidationResult::fail(Violation {
            kind: ViolationKind::EmptyBody,
            message: "PR Description is empty.".to_string(),
            suggestion: Some(expected_format(rules)),
            line: None,
        });
    }

    let first = text.lines().next().unwrap_or_default();
    let Some(first_line) = rules.pattern.split_prefix(first) else {
        return ValidationResult::fail(invalid_first_line(first, rules));
    };
    if let Some(violation) = check_description(&first_line, rules, Some(1)) {
        return ValidationResult::fail(violation);
    }

    for (idx, line) in text.lines().enumerate().skip(1) {
        let number = idx + 1;

        if line.trim().is_empty() || line.starts_with(&rules.bullet_marker) {
            continue;
        }

        match rules.pattern.split_prefix(line) {
            Some(ticket_line) => {
                if let Some(violation) = check_description(&ticket_line, rules, Some(number)) {
                    return ValidationResult::fail(violation);
                }
            }
            None => return ValidationResult::fail(malformed_line(number, line, rules)),
        }
    }

    ValidationResult::pass(&first_line.ticket)
}

/// Whether a commit message is a merge commit produced by GitHub.
pub fn is_merge_commit(text: &str, prefixes: &[String]) -> bool {
    prefixes
        .iter()
        .any(|prefix| !prefix.is_empty() && text.starts_with(prefix.as_str()))
}

/// Check the text after `ID:` for length. Only the rest of the same line
/// counts; a message body never makes up for a short subject.
fn check_description(
    line: &TicketLine<'_>,
    rules: &RuleSet,
    number: Option<usize>,
) -> Option<Violation> {
    let subject = line.description.lines().next().unwrap_or_default();
    let length = subject.trim().chars().count();
    let min = rules.min_description_length;

    if length >= min {
        return None;
    }

    Some(Violation {
        kind: ViolationKind::DescriptionTooShort,
        message: format!(
            "{}Description after '{}:' is too short: {} characters (min: {})",
            line_prefix(number),
            line.ticket,
            length,
            min
        ),
        suggestion: Some(format!(
            "Describe the change in at least {} characters after the colon",
            min
        )),
        line: number,
    })
}

fn missing_prefix(text: &str, source: &str, rules: &RuleSet) -> Violation {
    let found = text.lines().next().unwrap_or("");

    match rules.pattern.find(text) {
        Some(ticket) => Violation {
            kind: ViolationKind::TicketIdMisplaced,
            message: format!(
                "Ticket ID '{}' must be at the start of the {}, immediately followed by a colon. Found: \"{}\"",
                ticket, source, found
            ),
            suggestion: Some(expected_format(rules)),
            line: Some(1),
        },
        None => Violation {
            kind: ViolationKind::MissingTicketId,
            message: format!(
                "No Linear ticket ID found in the {}. Found: \"{}\"",
                source, found
            ),
            suggestion: Some(expected_format(rules)),
            line: Some(1),
        },
    }
}

fn invalid_first_line(first: &str, rules: &RuleSet) -> Violation {
    let what = if first.trim().is_empty() {
        "is blank"
    } else if first.starts_with(&rules.bullet_marker) {
        "is a bullet line"
    } else {
        "does not start with a ticket ID"
    };

    Violation {
        kind: ViolationKind::InvalidFirstLine,
        message: format!(
            "Line 1: the first line of the PR Description must contain the ticket ID, but it {}. Found: \"{}\"",
            what, first
        ),
        suggestion: Some(expected_format(rules)),
        line: Some(1),
    }
}

fn malformed_line(number: usize, line: &str, rules: &RuleSet) -> Violation {
    Violation {
        kind: ViolationKind::MalformedLine,
        message: format!(
            "Line {}: must be blank, start with '{}', or start with a ticket ID and a colon. Found: \"{}\"",
            number, rules.bullet_marker, line
        ),
        suggestion: Some(format!(
            "Prefix free-form notes with '{} ' or move them into a ticket line",
            rules.bullet_marker
        )),
        line: Some(number),
    }
}

fn line_prefix(number: Option<usize>) -> String {
    number.map(|n| format!("Line {}: ", n)).unwrap_or_default()
}

fn expected_format(rules: &RuleSet) -> String {
    format!(
        "Expected: \"{}\" (must start with the ID, have a colon, and at least {} characters of description)",
        EXAMPLE, rules.min_description_length
    )
}
