// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::action::{notify, notify_error, Checker, EventContext, Report, Subject};
use crate::config::{apply_overrides, LcConfig, VerifyMode};
use crate::error::{ConfigError, LcError, Result, ResultExt};
use crate::github::{CommentSink, GitHubClient};
use crate::linear::{LinearClient, TicketLookup};
use crate::rules::RuleEngine;
use std::path::Path;

use super::args::{Cli, Commands, CommitArgs, InitArgs, PrArgs};

/// Run the CLI with the given arguments.
///
/// Returns whether the check passed. Errors mean the check itself could not
/// run and must be reported apart from a failed check.
pub fn run(cli: Cli) -> Result<bool> {
    match cli.effective_command() {
        Commands::Run => run_action(&cli, &load_config(&cli)?),
        Commands::Commit(args) => run_commit(&cli, &load_config(&cli)?, args),
        Commands::Pr(args) => run_pr(&cli, &load_config(&cli)?, args),
        Commands::Version => run_version().map(|_| true),
        Commands::Init(args) => run_init(args).map(|_| true),
    }
}

/// Load configuration and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<LcConfig> {
    let config = if let Some(config_path) = &cli.config {
        LcConfig::load_from(config_path)?
    } else {
        LcConfig::load()?
    };
    Ok(apply_overrides(config, &cli.overrides()))
}

/// Build the Linear client the verification mode asks for.
fn linear_client(cli: &Cli, config: &LcConfig) -> Result<Option<LinearClient>> {
    let key = cli.linear_api_key();

    match (config.linear.verify, key) {
        (VerifyMode::Never, _) => Ok(None),
        (VerifyMode::Auto, None) => {
            tracing::debug!("No Linear API key, checking format only");
            Ok(None)
        }
        (VerifyMode::Always, None) => Err(LcError::Config(ConfigError::MissingRequired {
            key: "LINEAR_API_KEY".to_string(),
        })),
        (_, Some(key)) => Ok(Some(LinearClient::new(&config.linear, key)?)),
    }
}

/// Validate a subject with the configured rules and Linear client.
fn check(cli: &Cli, config: &LcConfig, subject: &Subject) -> Result<Report> {
    let engine = RuleEngine::from_config(&config.rules)?;
    let linear = linear_client(cli, config)?;
    let checker = Checker::new(&engine, linear.as_ref().map(|c| c as &dyn TicketLookup));

    let report = checker.check(subject)?;
    report.result.print(cli.format);
    Ok(report)
}

/// Build the GitHub client when a token is available.
fn github_client(cli: &Cli, config: &LcConfig) -> Result<Option<GitHubClient>> {
    Ok(cli
        .github_token()
        .map(|token| GitHubClient::new(&config.github, token))
        .transpose()?)
}

/// Run the check for the CI event described by the environment.
fn run_action(cli: &Cli, config: &LcConfig) -> Result<bool> {
    let context = EventContext::from_env()?;
    tracing::info!("Event: {:?}", context.event);

    let subject = context.subject(&config.rules);
    let report = match check(cli, config, &subject) {
        Ok(report) => report,
        Err(e) => {
            // The run still fails as an error; the comment only explains it.
            if let Ok(github) = github_client(cli, config) {
                notify_error(
                    &e,
                    &context,
                    &config.github,
                    github.as_ref().map(|g| g as &dyn CommentSink),
                );
            }
            return Err(e);
        }
    };

    if !report.passed() {
        let github = github_client(cli, config)?;
        notify(
            &report,
            &context,
            &config.github,
            github.as_ref().map(|g| g as &dyn CommentSink),
        );
    }

    Ok(report.passed())
}

/// Run the commit command.
fn run_commit(cli: &Cli, config: &LcConfig, args: CommitArgs) -> Result<bool> {
    tracing::debug!("Running commit command with args: {:?}", args);

    let message = match (args.message, args.file, args.rev) {
        (Some(message), _, _) => message,
        (None, Some(file), _) => read_text(&file)?,
        (None, None, rev) => crate::git::get_commit_message(rev.as_deref().unwrap_or("HEAD"))?,
    };

    let subject = Subject::for_commit(&message, &config.rules);

    Ok(check(cli, config, &subject)?.passed())
}

/// Run the pr command.
fn run_pr(cli: &Cli, config: &LcConfig, args: PrArgs) -> Result<bool> {
    tracing::debug!("Running pr command with args: {:?}", args);

    let body = match (args.body, args.body_file) {
        (Some(body), _) => body,
        (None, Some(file)) => read_text(&file)?,
        (None, None) => String::new(),
    };
    let title = args.title.unwrap_or_default();

    let subject = Subject::for_pr(&body, &title, &config.rules);

    Ok(check(cli, config, &subject)?.passed())
}

/// Read a file, or stdin for `-`.
fn read_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).context("stdin");
    }
    std::fs::read_to_string(path).context(path.display().to_string())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("linear-check {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    if args.path.exists() && !args.force {
        return Err(LcError::Config(ConfigError::AlreadyExists { path: args.path }));
    }

    std::fs::write(&args.path, example_config())?;

    println!("✓ Created {}", args.path.display());

    Ok(())
}
