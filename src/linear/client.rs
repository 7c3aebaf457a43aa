// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Linear GraphQL client.

use crate::config::LinearConfig;
use crate::error::LinearError;
use crate::rules::TicketReference;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use std::time::Duration;

const ISSUE_QUERY: &str = "query Issue($id: String!) { issue(id: $id) { id title } }";

/// Prefix of the GraphQL error Linear returns for an unknown identifier.
const NOT_FOUND_PREFIX: &str = "Entity not found";

/// An issue as returned by Linear.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinearIssue {
    /// Linear's internal id.
    pub id: String,
    /// Issue title.
    pub title: Option<String>,
}

/// Looks tickets up in an issue tracker.
pub trait TicketLookup {
    /// Find a ticket. `Ok(None)` means the tracker answered and the ticket
    /// does not exist; any `Err` means the tracker could not be asked.
    fn lookup(&self, ticket: &TicketReference) -> Result<Option<LinearIssue>, LinearError>;
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<IssueData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct IssueData {
    issue: Option<LinearIssue>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Blocking client for the Linear API.
#[derive(Debug, Clone)]
pub struct LinearClient {
    client: Client,
    api_url: String,
    api_key: String,
    timeout_secs: u64,
}

impl LinearClient {
    /// Create a client from configuration and an API key.
    pub fn new(config: &LinearConfig, api_key: impl Into<String>) -> Result<Self, LinearError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("linear-check/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LinearError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: api_key.into(),
            timeout_secs: config.timeout_secs,
        })
    }
}

impl TicketLookup for LinearClient {
    fn lookup(&self, ticket: &TicketReference) -> Result<Option<LinearIssue>, LinearError> {
        tracing::debug!("Looking up {} at {}", ticket, self.api_url);

        let payload = serde_json::json!({
            "query": ISSUE_QUERY,
            "variables": { "id": ticket.as_str() },
        });

        let response = self
            .client
            .post(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            // Personal API keys go in the header as-is, without a scheme.
            .header(AUTHORIZATION, &self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| self.transport_error(e))?;

        interpret_response(status, &body)
    }
}

impl LinearClient {
    fn transport_error(&self, err: reqwest::Error) -> LinearError {
        if err.is_timeout() {
            LinearError::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            LinearError::Transport {
                message: err.to_string(),
            }
        }
    }
}

/// Turn a raw GraphQL response into a lookup outcome.
pub fn interpret_response(status: u16, body: &str) -> Result<Option<LinearIssue>, LinearError> {
    let parsed: GraphQlResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) if (200..300).contains(&status) => {
            return Err(LinearError::Decode {
                message: e.to_string(),
            })
        }
        Err(_) => {
            return Err(LinearError::Status {
                status,
                body: body.to_string(),
            })
        }
    };

    if parsed
        .errors
        .iter()
        .any(|e| e.message.starts_with(NOT_FOUND_PREFIX))
    {
        return Ok(None);
    }

    match parsed.data {
        Some(data) if parsed.errors.is_empty() => {
            Ok(data.issue.filter(|issue| !issue.id.is_empty()))
        }
        _ => Err(LinearError::Api {
            response: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found() {
        let body = r#"{"data":{"issue":{"id":"9f1c","title":"Fix login"}}}"#;
        let issue = interpret_response(200, body).unwrap().unwrap();
        assert_eq!(issue.id, "9f1c");
        assert_eq!(issue.title.as_deref(), Some("Fix login"));
    }

    #[test]
    fn test_null_issue_is_not_found() {
        let body = r#"{"data":{"issue":null}}"#;
        assert_eq!(interpret_response(200, body).unwrap(), None);
    }

    #[test]
    fn test_entity_not_found_error() {
        let body = r#"{"data":null,"errors":[{"message":"Entity not found: Issue"}]}"#;
        assert_eq!(interpret_response(200, body).unwrap(), None);
        assert_eq!(interpret_response(400, body).unwrap(), None);
    }

    #[test]
    fn test_auth_failure_is_api_error() {
        let body = r#"{"errors":[{"message":"Authentication required, not authenticated"}]}"#;
        let err = interpret_response(400, body).unwrap_err();
        assert!(matches!(err, LinearError::Api { .. }));
    }

    #[test]
    fn test_non_json_error_status() {
        let err = interpret_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LinearError::Status { status: 502, .. }));
    }

    #[test]
    fn test_non_json_success_is_decode_error() {
        let err = interpret_response(200, "not json").unwrap_err();
        assert!(matches!(err, LinearError::Decode { .. }));
    }

    #[test]
    fn test_unreachable_host_fails() {
        let config = LinearConfig {
            api_url: "http://127.0.0.1:9/graphql".to_string(),
            timeout_secs: 2,
            ..LinearConfig::default()
        };
        let client = LinearClient::new(&config, "lin_api_test").unwrap();
        let ticket = crate::rules::TicketPattern::default().find("ENG-1").unwrap();
        assert!(client.lookup(&ticket).is_err());
    }
}
