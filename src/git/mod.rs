// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Commit messages are read through the system `git` binary, which is always
//! present on CI runners.

pub mod commands;

pub use commands::{get_commit_message, get_commit_message_in};
