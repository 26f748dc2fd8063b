//! Package installation.
//!
//! Each install is fire-and-forget: the installer writes straight to the
//! console and its exit status never changes what happens next. Outcomes are
//! kept in an [`InstallReport`] for logging and tests.

use crate::config::{InstallerConfig, PackageSpec};
use crate::error::BootstrapError;
use crate::shell::{CommandOptions, CommandSpec};

use super::BootstrapContext;

/// What happened when one package was handed to the installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallAttempt {
    /// Package name.
    pub package: String,

    /// Installer exit code; `None` if it was killed or never started.
    pub exit_code: Option<i32>,

    /// Whether the installer process was started.
    pub spawned: bool,
}

impl InstallAttempt {
    /// Whether the installer ran and exited zero.
    pub fn succeeded(&self) -> bool {
        self.spawned && self.exit_code == Some(0)
    }
}

/// Record of every install attempted in one run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Attempts in invocation order.
    pub attempted: Vec<InstallAttempt>,
}

impl InstallReport {
    /// Names of the packages handed to the installer, in order.
    pub fn packages(&self) -> Vec<&str> {
        self.attempted.iter().map(|a| a.package.as_str()).collect()
    }

    /// Attempts that did not exit zero.
    pub fn failures(&self) -> impl Iterator<Item = &InstallAttempt> {
        self.attempted.iter().filter(|a| !a.succeeded())
    }
}

/// Build the installer command for one package.
pub fn install_command(installer: &InstallerConfig, package: &PackageSpec) -> CommandSpec {
    CommandSpec::new(&installer.command)
        .args(installer.args.iter().cloned())
        .arg(&package.name)
}

/// Hand one package to the installer.
///
/// Never fails: a non-zero exit or a failure to start the installer is
/// logged and recorded, and the caller moves on.
pub fn install(
    installer: &InstallerConfig,
    package: &PackageSpec,
    ctx: &BootstrapContext<'_>,
) -> InstallAttempt {
    let spec = install_command(installer, package);

    match (ctx.run_command)(&spec, &CommandOptions::inherited()) {
        Ok(result) => {
            if result.success {
                tracing::debug!("Installed {}", package.name);
            } else {
                tracing::debug!(
                    "Installer exited with {:?} for {}; continuing",
                    result.exit_code,
                    package.name
                );
            }
            InstallAttempt {
                package: package.name.clone(),
                exit_code: result.exit_code,
                spawned: true,
            }
        }
        Err(e) => {
            match &e {
                BootstrapError::CommandFailed { code: None, .. } => tracing::debug!(
                    "Could not start '{}' for {}; continuing",
                    installer.command,
                    package.name
                ),
                other => tracing::debug!("Install of {} failed: {}; continuing", package.name, other),
            }
            InstallAttempt {
                package: package.name.clone(),
                exit_code: None,
                spawned: false,
            }
        }
    }
}
