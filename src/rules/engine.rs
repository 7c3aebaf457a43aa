// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit and PR validation.

use crate::config::RulesConfig;
use crate::error::Result;

use super::builtin::{self, RuleSet};
use super::validator::{ValidationInput, ValidationResult};

/// Rule engine for validating commit messages and PR descriptions.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    /// Create a new rule engine with the given rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Create a rule engine from configuration.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        Ok(Self::new(RuleSet::from_config(config)?))
    }

    /// The rules this engine applies.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate an input.
    pub fn validate(&self, input: &ValidationInput) -> ValidationResult {
        let result = builtin::validate(input, &self.rules);
        tracing::debug!(
            source = input.source(),
            passed = result.passed,
            kind = ?result.kind(),
            "validated input"
        );
        result
    }

    /// Validate a pull request title with the commit-message rule.
    pub fn validate_title(&self, title: &str) -> ValidationResult {
        builtin::check_ticket_text(title, "PR Title", &self.rules)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}
