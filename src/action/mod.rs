// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub Action entry point: event context, check run, PR comments.

mod context;
mod runner;

pub use context::{EventContext, EventKind, Subject};
pub use runner::{notify, notify_error, Checker, Report};
