// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::LcConfig;

/// Get the default configuration.
pub fn default_config() -> LcConfig {
    LcConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# linear-check configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

[rules]
# Ticket identifier, matched case-sensitively at the start of a line
ticket_pattern = "[A-Z]+-\\d+"
min_description_length = 10
bullet_marker = "*"
skip_merge_commits = true
merge_prefixes = ["Merge pull request", "Merge branch"]
# Check the PR title when the description is empty
pr_title_fallback = false

[linear]
api_url = "https://api.linear.app/graphql"
# auto: verify when LINEAR_API_KEY is set; always: require it; never: format only
verify = "auto"
timeout_secs = 10

[github]
api_url = "https://api.github.com"
comment = true
comment_template = """
❌ **Linear Ticket Check Failed**

{{reason}}"""
# Posted when Linear cannot be queried; the check still errors out
error_template = """
⚠️ **Linear Ticket Check Could Not Run**

{{reason}}"""
timeout_secs = 10
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VerifyMode;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.rules.min_description_length, 10);
        assert_eq!(config.linear.verify, VerifyMode::Auto);
    }

    #[test]
    fn test_example_config_parseable() {
        let config: LcConfig =
            toml::from_str(example_config()).expect("Example config should parse");
        assert_eq!(config.rules, default_config().rules);
        assert!(config.github.comment_template.contains("{{reason}}"));
        assert_eq!(config.github, default_config().github);
    }
}
