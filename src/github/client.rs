// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub REST client for pull request comments.

use crate::config::GitHubConfig;
use crate::error::GitHubError;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use std::time::Duration;

/// A pull request to comment on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    /// `owner/name`.
    pub repository: String,
    /// Pull request number.
    pub number: u64,
}

/// Receives failure comments.
pub trait CommentSink {
    /// Post `body` as a comment on the pull request.
    fn post_comment(&self, target: &PullRequestRef, body: &str) -> Result<(), GitHubError>;
}

/// Blocking client for the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client from configuration and a token.
    pub fn new(config: &GitHubConfig, token: impl Into<String>) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("linear-check/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GitHubError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn comments_url(&self, target: &PullRequestRef) -> String {
        format!(
            "{}/repos/{}/issues/{}/comments",
            self.api_url, target.repository, target.number
        )
    }
}

impl CommentSink for GitHubClient {
    fn post_comment(&self, target: &PullRequestRef, body: &str) -> Result<(), GitHubError> {
        let url = self.comments_url(target);
        tracing::debug!("Posting comment to {}", url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github.v3+json")
            .json(&serde_json::json!({ "body": body }))
            .send()
            .map_err(|e| GitHubError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(GitHubError::Status {
            status: status.as_u16(),
            body: response.text().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_url() {
        let config = GitHubConfig {
            api_url: "https://ghe.example.com/api/v3/".to_string(),
            ..GitHubConfig::default()
        };
        let client = GitHubClient::new(&config, "token").unwrap();
        let url = client.comments_url(&PullRequestRef {
            repository: "acme/widgets".to_string(),
            number: 42,
        });
        assert_eq!(
            url,
            "https://ghe.example.com/api/v3/repos/acme/widgets/issues/42/comments"
        );
    }
}
