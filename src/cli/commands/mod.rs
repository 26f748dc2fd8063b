//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Running with no subcommand is the same as
//! `install`.

pub mod build;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod install;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::config::{load_config, BootstrapConfig};
use crate::error::{BootstrapError, Result};
use crate::ui::UserInterface;

/// Exit code for unreadable or invalid configuration.
pub const CONFIG_ERROR_EXIT: i32 = 2;

/// Load configuration, reporting config problems through the UI.
///
/// Returns `Ok(None)` when the problem has been reported and the command
/// should exit with [`CONFIG_ERROR_EXIT`].
pub(crate) fn load_or_report(
    project_root: &Path,
    explicit: Option<&Path>,
    ui: &mut dyn UserInterface,
) -> Result<Option<BootstrapConfig>> {
    match load_config(project_root, explicit) {
        Ok(config) => Ok(Some(config)),
        Err(
            e @ (BootstrapError::ConfigNotFound { .. }
            | BootstrapError::ConfigParseError { .. }
            | BootstrapError::ConfigValidationError { .. }),
        ) => {
            ui.error(&e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
