// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! PR comment rendering.

use crate::error::GitHubError;
use handlebars::Handlebars;
use serde::Serialize;

#[derive(Serialize)]
struct CommentContext<'a> {
    reason: &'a str,
    source: &'a str,
}

/// Render a failure comment from a handlebars template.
///
/// Markdown is passed through untouched; the reason is not HTML-escaped.
pub fn render_comment(template: &str, reason: &str, source: &str) -> Result<String, GitHubError> {
    let mut registry = Handlebars::new();
    registry.register_escape_fn(handlebars::no_escape);
    registry.set_strict_mode(true);

    registry
        .render_template(template, &CommentContext { reason, source })
        .map_err(|e| GitHubError::Template {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COMMENT_TEMPLATE;

    #[test]
    fn test_default_template() {
        let body = render_comment(
            DEFAULT_COMMENT_TEMPLATE,
            "PR Description is empty.",
            "PR Description",
        )
        .unwrap();
        assert_eq!(
            body,
            "❌ **Linear Ticket Check Failed**\n\nPR Description is empty."
        );
    }

    #[test]
    fn test_reason_not_escaped() {
        let body = render_comment("{{reason}}", "Found: \"a < b\"", "Commit Message").unwrap();
        assert_eq!(body, "Found: \"a < b\"");
    }

    #[test]
    fn test_source_available() {
        let body = render_comment("{{source}}: {{reason}}", "bad", "PR Title").unwrap();
        assert_eq!(body, "PR Title: bad");
    }

    #[test]
    fn test_unknown_variable_is_error() {
        assert!(render_comment("{{author}}", "bad", "PR Title").is_err());
    }
}
