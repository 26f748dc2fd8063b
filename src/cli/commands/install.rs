//! Install command implementation.
//!
//! The `serial-bootstrap install` command (also the default) checks the
//! interpreter and hands each configured package to the installer.

use std::path::{Path, PathBuf};

use crate::bootstrap::{default_context, BootstrapOptions, BootstrapOutcome, Bootstrapper};
use crate::cli::args::InstallArgs;
use crate::config::BootstrapConfig;
use crate::error::Result;
use crate::shell::is_ci;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::{load_or_report, CONFIG_ERROR_EXIT};

/// The install command implementation.
pub struct InstallCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: InstallArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

/// Whether to wait for a keypress once installation finishes.
///
/// CI runs never wait, and neither do dry runs.
pub fn should_pause(args: &InstallArgs, config: &BootstrapConfig, ci: bool) -> bool {
    !args.no_pause && !args.dry_run && config.finish.pause && !ci
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = load_or_report(&self.project_root, self.config_path.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        let options = BootstrapOptions {
            dry_run: self.args.dry_run,
            pause: should_pause(&self.args, &config, is_ci()) && ui.is_interactive(),
        };
        tracing::debug!("Bootstrap options: {:?}", options);

        let outcome = Bootstrapper::new(&config, default_context(), options).run(ui)?;
        if let BootstrapOutcome::Completed(report) = &outcome {
            tracing::debug!(
                "Handed {} packages to '{}'",
                report.attempted.len(),
                config.installer.command
            );
        }

        Ok(CommandResult::from_exit_code(outcome.exit_code()))
    }
}
