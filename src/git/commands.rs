// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git command wrappers for reading commit messages.

use crate::error::{GitError, LcError, Result};
use std::path::Path;
use std::process::Command;

/// Get the full message of a commit in the current directory's repository.
pub fn get_commit_message(reference: &str) -> Result<String> {
    get_commit_message_in(Path::new("."), reference)
}

/// Get the full message of a commit in a given repository.
pub fn get_commit_message_in(repo: &Path, reference: &str) -> Result<String> {
    // Refuse anything git would parse as an option.
    if reference.is_empty() || reference.starts_with('-') {
        return Err(LcError::Git(GitError::InvalidReference {
            reference: reference.to_string(),
        }));
    }

    let output = Command::new("git")
        .args(["log", "-1", "--format=%B", reference, "--"])
        .current_dir(repo)
        .output()
        .map_err(|e| {
            LcError::Git(GitError::CommandFailed {
                command: "git log".to_string(),
                message: format!("Failed to run git: {}", e),
            })
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!("git log failed for {}: {}", reference, stderr.trim());
        return Err(LcError::Git(GitError::InvalidReference {
            reference: reference.to_string(),
        }));
    }

    // %B ends with a newline that is not part of the message.
    let message = String::from_utf8_lossy(&output.stdout);
    Ok(message.trim_end_matches('\n').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap()
            .status;
        assert!(status.success(), "git {:?} failed", args);
    }

    fn create_test_repo(message: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-q"]);
        git(dir.path(), &["config", "user.email", "test@example.com"]);
        git(dir.path(), &["config", "user.name", "Test User"]);
        git(dir.path(), &["config", "commit.gpgsign", "false"]);
        std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
        git(dir.path(), &["add", "test.txt"]);
        git(dir.path(), &["commit", "-q", "-m", message]);
        dir
    }

    #[test]
    fn test_get_commit_message() {
        let dir = create_test_repo("ENG-1: add the first file\n\n* with a body");
        let message = get_commit_message_in(dir.path(), "HEAD").unwrap();
        assert_eq!(message, "ENG-1: add the first file\n\n* with a body");
    }

    #[test]
    fn test_unknown_reference() {
        let dir = create_test_repo("ENG-1: add the first file");
        let err = get_commit_message_in(dir.path(), "does-not-exist").unwrap_err();
        assert!(matches!(err, LcError::Git(GitError::InvalidReference { .. })));
    }

    #[test]
    fn test_option_like_reference_rejected() {
        let err = get_commit_message_in(Path::new("."), "--all").unwrap_err();
        assert!(matches!(err, LcError::Git(GitError::InvalidReference { .. })));
    }
}
