//! Environment bootstrapping for the serial tool.
//!
//! The flow is linear:
//!
//! 1. Probe the interpreter. If it is missing, print guidance and stop
//!    (exit status 1) before anything is installed.
//! 2. Hand each configured package to the installer, in order, ignoring
//!    how each install ends.
//! 3. Print the completion message and the command to run next, then wait
//!    for a keypress.
//!
//! # Example
//!
//! ```
//! use serial_bootstrap::bootstrap::{BootstrapContext, BootstrapOptions, Bootstrapper};
//! use serial_bootstrap::config::BootstrapConfig;
//! use serial_bootstrap::shell::{CommandOptions, CommandResult, CommandSpec};
//! use serial_bootstrap::ui::MockUI;
//! use std::time::Duration;
//!
//! let runner = |_: &CommandSpec, _: &CommandOptions| -> serial_bootstrap::Result<CommandResult> {
//!     Ok(CommandResult::success("Python 3.12.1".into(), String::new(), Duration::ZERO))
//! };
//! let config = BootstrapConfig::default();
//! let bootstrapper = Bootstrapper::new(
//!     &config,
//!     BootstrapContext { run_command: &runner },
//!     BootstrapOptions::default(),
//! );
//!
//! let mut ui = MockUI::new();
//! let outcome = bootstrapper.run(&mut ui).unwrap();
//! assert_eq!(outcome.exit_code(), 0);
//! ```

pub mod installer;
pub mod probe;

pub use installer::{install, install_command, InstallAttempt, InstallReport};
pub use probe::{check_interpreter, parse_version, probe_command, InterpreterInfo};

use crate::config::{BootstrapConfig, InterpreterConfig};
use crate::error::{BootstrapError, Result};
use crate::shell::{execute, CommandOptions, CommandResult, CommandSpec};
use crate::ui::UserInterface;

/// Prompt shown while waiting for acknowledgment.
pub const PAUSE_PROMPT: &str = "Press any key to exit...";

/// Mockable dependencies for the bootstrap flow.
pub struct BootstrapContext<'a> {
    /// Run an external command.
    pub run_command: &'a dyn Fn(&CommandSpec, &CommandOptions) -> Result<CommandResult>,
}

/// Build the default `BootstrapContext` for production use.
pub fn default_context() -> BootstrapContext<'static> {
    BootstrapContext {
        run_command: &execute,
    }
}

/// Knobs set from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapOptions {
    /// Print installer commands instead of running them.
    pub dry_run: bool,

    /// Wait for a keypress after the completion message.
    pub pause: bool,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            pause: true,
        }
    }
}

/// How a bootstrap run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The interpreter was found and every package was handed to the installer.
    Completed(InstallReport),

    /// The interpreter probe failed; nothing was installed.
    InterpreterMissing,
}

impl BootstrapOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Completed(_) => 0,
            Self::InterpreterMissing => 1,
        }
    }
}

/// Probe the interpreter, reporting the result through the UI.
///
/// Returns `Ok(None)` after printing guidance when the interpreter is
/// missing. Errors other than "not found" are propagated.
pub fn verify_interpreter(
    config: &InterpreterConfig,
    ctx: &BootstrapContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<Option<InterpreterInfo>> {
    let mut spinner = ui.start_spinner(&format!("Checking for {}...", config.command));

    match check_interpreter(config, ctx) {
        Ok(info) => {
            spinner.finish_success(&format!("Found {}", info.describe()));
            Ok(Some(info))
        }
        Err(err @ BootstrapError::InterpreterNotFound { .. }) => {
            spinner.finish_error(&format!("{} is not available", config.command));
            ui.error(&err.to_string());
            ui.show_hint(&format!(
                "Tick \"Add {} to PATH\" during installation, then run this setup again.",
                config.command
            ));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Runs the bootstrap flow against a resolved configuration.
pub struct Bootstrapper<'a> {
    config: &'a BootstrapConfig,
    ctx: BootstrapContext<'a>,
    options: BootstrapOptions,
}

impl<'a> Bootstrapper<'a> {
    /// Create a bootstrapper.
    pub fn new(
        config: &'a BootstrapConfig,
        ctx: BootstrapContext<'a>,
        options: BootstrapOptions,
    ) -> Self {
        Self {
            config,
            ctx,
            options,
        }
    }

    /// Run the whole flow.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<BootstrapOutcome> {
        ui.show_header("Serial tool setup");

        if verify_interpreter(&self.config.interpreter, &self.ctx, ui)?.is_none() {
            return Ok(BootstrapOutcome::InterpreterMissing);
        }

        let report = self.install_all(ui);
        self.finish(ui);

        Ok(BootstrapOutcome::Completed(report))
    }

    /// Hand every configured package to the installer, in order.
    pub fn install_all(&self, ui: &mut dyn UserInterface) -> InstallReport {
        let mut report = InstallReport::default();
        let total = self.config.packages.len();

        for (index, package) in self.config.packages.iter().enumerate() {
            ui.show_progress(index + 1, total);
            ui.message(&format!("Installing {}...", package.label()));

            let spec = install_command(&self.config.installer, package);
            if self.options.dry_run {
                ui.message(&format!("Would run: {}", spec));
                continue;
            }
            if ui.output_mode().shows_command_lines() {
                ui.show_hint(&format!("$ {}", spec));
            }

            report
                .attempted
                .push(install(&self.config.installer, package, &self.ctx));
        }

        let failed = report.failures().count();
        if failed > 0 {
            tracing::debug!(
                "{} of {} installs did not exit cleanly",
                failed,
                report.attempted.len()
            );
        }

        report
    }

    /// Print the completion message and hint, then wait for a keypress.
    pub fn finish(&self, ui: &mut dyn UserInterface) {
        ui.success("Installation complete!");
        ui.show_hint(&format!(
            "Start the serial tool with: {}",
            self.config.finish.hint
        ));

        // A failed read (e.g. Ctrl+C at the prompt) counts as acknowledgment.
        if self.options.pause {
            if let Err(e) = ui.wait_for_key(PAUSE_PROMPT) {
                tracing::debug!("Keypress wait ended early: {}", e);
            }
        }
    }
}
