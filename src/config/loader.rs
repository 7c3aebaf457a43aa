// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and overrides.

use crate::error::{ConfigError, LcError, Result};
use std::path::{Path, PathBuf};

use super::schema::{LcConfig, VerifyMode};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "linear-check.toml",
    ".linear-check.toml",
    ".github/linear-check.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    // XDG config directory
    let user_config = dirs::config_dir()?.join("linear-check").join("config.toml");
    user_config.is_file().then_some(user_config)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LcConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LcConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LcConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LcError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LcError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LcConfig> {
    toml::from_str(content).map_err(|e| {
        LcError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Command-line overrides applied on top of the loaded file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replacement ticket pattern.
    pub ticket_pattern: Option<String>,
    /// Replacement minimum description length.
    pub min_description_length: Option<usize>,
    /// Skip the Linear lookup entirely.
    pub offline: bool,
    /// Replacement verification mode.
    pub verify: Option<VerifyMode>,
}

/// Apply overrides, with the overrides taking precedence.
pub fn apply_overrides(mut config: LcConfig, overrides: &ConfigOverrides) -> LcConfig {
    if let Some(ref pattern) = overrides.ticket_pattern {
        config.rules.ticket_pattern = pattern.clone();
    }
    if let Some(min) = overrides.min_description_length {
        config.rules.min_description_length = min;
    }
    if let Some(verify) = overrides.verify {
        config.linear.verify = verify;
    }
    if overrides.offline {
        config.linear.verify = VerifyMode::Never;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.rules.min_description_length, 10);
        assert_eq!(config.linear.timeout_secs, 10);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
ticket_pattern = "(ENG|OPS)-\\d+"
min_description_length = 20
merge_prefixes = ["Merge"]

[linear]
verify = "never"

[github]
comment = false
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules.ticket_pattern, r"(ENG|OPS)-\d+");
        assert_eq!(config.rules.min_description_length, 20);
        assert_eq!(config.rules.merge_prefixes, vec!["Merge"]);
        assert_eq!(config.linear.verify, VerifyMode::Never);
        assert!(!config.github.comment);
        // Untouched sections keep their defaults
        assert_eq!(config.rules.bullet_marker, "*");
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("[rules\nticket_pattern = 1").unwrap_err();
        assert!(matches!(err, LcError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, LcError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".github")).unwrap();
        std::fs::write(
            dir.path().join(".github/linear-check.toml"),
            "[rules]\nmin_description_length = 3\n",
        )
        .unwrap();
        let nested = dir.path().join("crates/app");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert!(found.ends_with(".github/linear-check.toml"));
        let config = load_config_from(&found).unwrap();
        assert_eq!(config.rules.min_description_length, 3);
    }

    #[test]
    fn test_apply_overrides() {
        let overrides = ConfigOverrides {
            ticket_pattern: Some("ENG-\\d+".to_string()),
            min_description_length: Some(5),
            offline: true,
            verify: Some(VerifyMode::Always),
        };
        let config = apply_overrides(LcConfig::default(), &overrides);
        assert_eq!(config.rules.ticket_pattern, "ENG-\\d+");
        assert_eq!(config.rules.min_description_length, 5);
        // offline wins over an explicit mode
        assert_eq!(config.linear.verify, VerifyMode::Never);
    }
}
