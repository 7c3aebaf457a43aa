// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for ticket validation.
//!
//! This module checks commit messages and pull request descriptions for a
//! leading Linear ticket reference and a meaningful description.

mod builtin;
mod engine;
mod ticket;
mod validator;

pub use builtin::{
    check_commit_message, check_pr_body, check_ticket_text, is_merge_commit, validate, RuleSet,
};
pub use engine::RuleEngine;
pub use ticket::{TicketLine, TicketPattern, TicketReference};
pub use validator::{ValidationInput, ValidationResult, Violation, ViolationKind};
