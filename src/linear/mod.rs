// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Linear ticket verification.
//!
//! Used after a successful format check to confirm the referenced ticket
//! exists. Lookups fail closed: anything other than a clear answer from
//! Linear is an error.

mod client;

pub use client::{interpret_response, LinearClient, LinearIssue, TicketLookup};
