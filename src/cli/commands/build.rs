//! Build command implementation.
//!
//! The `serial-bootstrap build` command packages the serial tool with
//! PyInstaller.

use std::path::{Path, PathBuf};

use crate::bootstrap::default_context;
use crate::cli::args::BuildArgs;
use crate::config::BootstrapConfig;
use crate::error::{BootstrapError, Result};
use crate::packaging::build;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::{load_or_report, CONFIG_ERROR_EXIT};

/// The build command implementation.
pub struct BuildCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: BuildArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Apply command-line overrides to the loaded build section.
    fn apply_overrides(&self, config: &mut BootstrapConfig) {
        if let Some(script) = &self.args.script {
            config.build.script = script.clone();
        }
        if let Some(name) = &self.args.name {
            config.build.name = name.clone();
        }
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(mut config) =
            load_or_report(&self.project_root, self.config_path.as_deref(), ui)?
        else {
            return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
        };
        self.apply_overrides(&mut config);

        match build(&config, &self.project_root, &default_context(), ui) {
            Ok(outcome) => Ok(CommandResult::from_exit_code(outcome.exit_code())),
            Err(e @ (BootstrapError::MissingFile { .. } | BootstrapError::CommandFailed { .. })) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn overrides_replace_config_values() {
        let args = BuildArgs {
            script: Some(PathBuf::from("tool/main.py")),
            name: Some("Monitor".to_string()),
        };
        let cmd = BuildCommand::new(Path::new("/project"), None, args);
        let mut config = BootstrapConfig::default();

        cmd.apply_overrides(&mut config);

        assert_eq!(config.build.script, PathBuf::from("tool/main.py"));
        assert_eq!(config.build.name, "Monitor");
    }

    #[test]
    fn missing_script_exits_one() {
        let temp = TempDir::new().unwrap();
        let cmd = BuildCommand::new(temp.path(), None, BuildArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("serial_tool.py"));
    }

    #[test]
    fn missing_interpreter_exits_one() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("serial_tool.py"), "").unwrap();
        fs::write(
            temp.path().join(".serial-bootstrap.yml"),
            "interpreter:\n  command: serial-bootstrap-no-such-interpreter\n",
        )
        .unwrap();
        let cmd = BuildCommand::new(temp.path(), None, BuildArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("https://www.python.org/downloads/"));
    }

    #[test]
    fn malformed_config_exits_two() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".serial-bootstrap.yml"), "build: [oops\n").unwrap();
        let cmd = BuildCommand::new(temp.path(), None, BuildArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
    }
}
