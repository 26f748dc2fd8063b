//! Interpreter probe.
//!
//! Runs the configured version query once. A non-zero exit and a failure to
//! spawn the interpreter are the same outcome: the interpreter is not usable
//! and the user is pointed at the download page.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::InterpreterConfig;
use crate::error::{BootstrapError, Result};
use crate::shell::{CommandOptions, CommandSpec};

use super::BootstrapContext;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+\.\d+(?:\.\d+)?(?:(?:a|b|rc)\d+)?)\b").unwrap());

/// A reachable interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterInfo {
    /// Command that answered the probe.
    pub command: String,

    /// Version parsed from the probe output, if recognizable.
    pub version: Option<String>,
}

impl InterpreterInfo {
    /// Short description for the "found" line, e.g. `python 3.12.1`.
    pub fn describe(&self) -> String {
        match &self.version {
            Some(version) => format!("{} {}", self.command, version),
            None => self.command.clone(),
        }
    }
}

/// Build the version query command.
pub fn probe_command(config: &InterpreterConfig) -> CommandSpec {
    CommandSpec::new(&config.command).args(config.version_args.iter().cloned())
}

/// Extract the first version number from interpreter output.
///
/// Handles banners such as `Python 3.11.4` and pre-releases like
/// `Python 3.13.0rc1`.
pub fn parse_version(output: &str) -> Option<String> {
    VERSION_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Run the interpreter probe.
///
/// # Errors
///
/// Returns `InterpreterNotFound` when the version query exits non-zero or
/// cannot be started. Any other error from the runner is propagated.
pub fn check_interpreter(
    config: &InterpreterConfig,
    ctx: &BootstrapContext<'_>,
) -> Result<InterpreterInfo> {
    let spec = probe_command(config);
    let not_found = || BootstrapError::InterpreterNotFound {
        command: config.command.clone(),
        download_url: config.download_url.clone(),
    };

    let result = match (ctx.run_command)(&spec, &CommandOptions::captured()) {
        Ok(result) => result,
        Err(BootstrapError::CommandFailed { code: None, .. }) => {
            tracing::debug!("Interpreter '{}' could not be started", config.command);
            return Err(not_found());
        }
        Err(e) => return Err(e),
    };

    if !result.success {
        tracing::debug!(
            "Interpreter probe '{}' exited with {:?}",
            spec,
            result.exit_code
        );
        return Err(not_found());
    }

    let version = parse_version(&result.combined_output());
    tracing::debug!(
        "Interpreter '{}' reports version {}",
        config.command,
        version.as_deref().unwrap_or("unknown")
    );

    Ok(InterpreterInfo {
        command: config.command.clone(),
        version,
    })
}
