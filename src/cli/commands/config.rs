//! Config command implementation.
//!
//! The `serial-bootstrap config` command shows resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{BootstrapError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::{load_or_report, CONFIG_ERROR_EXIT};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = load_or_report(&self.project_root, self.config_path.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| BootstrapError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let paths = ConfigPaths::discover(&self.project_root, self.config_path.as_deref());
            let layers = paths.all();
            if layers.is_empty() {
                ui.message("# built-in defaults");
            }
            for path in layers {
                ui.message(&format!("# {}", path.display()));
            }
            let yaml = serde_yaml::to_string(&config).map_err(|e| BootstrapError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}
