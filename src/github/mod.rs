// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub integration: failure comments on pull requests.

mod client;
mod comment;

pub use client::{CommentSink, GitHubClient, PullRequestRef};
pub use comment::render_comment;
