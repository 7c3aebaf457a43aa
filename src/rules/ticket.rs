// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ticket identifier matching.

use crate::config::DEFAULT_TICKET_PATTERN;
use crate::error::{ConfigError, LcError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// The default pattern, compiled once.
    static ref DEFAULT_PATTERN: TicketPattern = TicketPattern::compile(DEFAULT_TICKET_PATTERN)
        .unwrap_or_else(|e| panic!("default ticket pattern must compile: {}", e));
}

/// A ticket identifier extracted from commit or PR text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TicketReference(String);

impl TicketReference {
    /// The identifier as written, e.g. `ENG-123`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TicketReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A line that starts with `ID:`, split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketLine<'a> {
    /// The ticket prefix.
    pub ticket: TicketReference,
    /// Everything after the colon, untrimmed.
    pub description: &'a str,
}

/// Compiled ticket identifier pattern.
#[derive(Debug, Clone)]
pub struct TicketPattern {
    source: String,
    prefix: Regex,
    anywhere: Regex,
}

impl TicketPattern {
    /// Compile a user-supplied pattern. Anchors are added here, so the
    /// pattern itself should describe just the identifier.
    pub fn compile(pattern: &str) -> Result<Self> {
        let invalid = |e: regex::Error| {
            LcError::Config(ConfigError::InvalidValue {
                key: "rules.ticket_pattern".to_string(),
                message: e.to_string(),
            })
        };

        if pattern.trim().is_empty() {
            return Err(LcError::Config(ConfigError::InvalidValue {
                key: "rules.ticket_pattern".to_string(),
                message: "pattern is empty".to_string(),
            }));
        }

        let prefix = Regex::new(&format!(r"^(?P<ticket>{}):", pattern)).map_err(invalid)?;
        let anywhere = Regex::new(&format!(r"(?P<ticket>{})", pattern)).map_err(invalid)?;

        Ok(Self {
            source: pattern.to_string(),
            prefix,
            anywhere,
        })
    }

    /// The pattern as configured.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Split a line of the form `ID:rest`. The identifier must be the very
    /// first thing on the line.
    pub fn split_prefix<'a>(&self, line: &'a str) -> Option<TicketLine<'a>> {
        let captures = self.prefix.captures(line)?;
        let ticket = captures.name("ticket")?.as_str().to_string();
        let end = captures.get(0)?.end();
        Some(TicketLine {
            ticket: TicketReference(ticket),
            description: &line[end..],
        })
    }

    /// Find the first identifier anywhere in the text.
    pub fn find(&self, text: &str) -> Option<TicketReference> {
        self.anywhere
            .captures(text)
            .and_then(|c| c.name("ticket"))
            .map(|m| TicketReference(m.as_str().to_string()))
    }
}

impl Default for TicketPattern {
    fn default() -> Self {
        DEFAULT_PATTERN.clone()
    }
}

impl PartialEq for TicketPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for TicketPattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefix() {
        let pattern = TicketPattern::default();
        let line = pattern.split_prefix("ENG-42: fix the login bug").unwrap();
        assert_eq!(line.ticket.as_str(), "ENG-42");
        assert_eq!(line.description, " fix the login bug");
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        let pattern = TicketPattern::default();
        assert!(pattern.split_prefix(" ENG-42: leading space").is_none());
        assert!(pattern.split_prefix("fix ENG-42: later").is_none());
        assert!(pattern.split_prefix("ENG-42 no colon here").is_none());
    }

    #[test]
    fn test_case_sensitive() {
        let pattern = TicketPattern::default();
        assert!(pattern.split_prefix("eng-42: lowercase team key").is_none());
        assert!(pattern.find("eng-42").is_none());
    }

    #[test]
    fn test_find_anywhere() {
        let pattern = TicketPattern::default();
        let found = pattern.find("fix the login bug ABC-123:").unwrap();
        assert_eq!(found.to_string(), "ABC-123");
    }

    #[test]
    fn test_custom_pattern() {
        let pattern = TicketPattern::compile("(?:ENG|OPS)-[0-9]{1,4}").unwrap();
        assert!(pattern.split_prefix("OPS-7: rotate the certificates").is_some());
        assert!(pattern.split_prefix("ABC-7: rotate the certificates").is_none());
        assert_eq!(pattern.as_str(), "(?:ENG|OPS)-[0-9]{1,4}");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = TicketPattern::compile("[A-Z+-").unwrap_err();
        assert!(err.to_string().contains("rules.ticket_pattern"));
        assert!(TicketPattern::compile("   ").is_err());
    }
}
