//! Bundling the serial tool into a standalone executable.
//!
//! Runs PyInstaller through the probed interpreter (`python -m PyInstaller`).
//! Unlike package installs, the build's exit status matters: a failed build
//! is an error.

use std::path::{Path, PathBuf};

use crate::bootstrap::{verify_interpreter, BootstrapContext};
use crate::config::{BootstrapConfig, BuildConfig};
use crate::error::{BootstrapError, Result};
use crate::shell::platform::add_data_separator;
use crate::shell::{CommandOptions, CommandSpec};
use crate::ui::UserInterface;

/// How a build ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// PyInstaller finished; the executable is expected at this path.
    Built { executable: PathBuf },

    /// The interpreter probe failed; PyInstaller was not run.
    InterpreterMissing,
}

impl BuildOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Built { .. } => 0,
            Self::InterpreterMissing => 1,
        }
    }
}

/// Build the PyInstaller argument list.
///
/// Data files are included only if they exist under `project_root`.
pub fn pyinstaller_args(build: &BuildConfig, project_root: &Path) -> Vec<String> {
    let mut args = vec![build.script.display().to_string()];
    args.push(format!("--name={}", build.name));
    if build.onefile {
        args.push("--onefile".to_string());
    }
    args.push(if build.console { "--console" } else { "--windowed" }.to_string());
    args.push(format!("--icon={}", build.icon));

    for data in &build.data_files {
        if project_root.join(data).is_file() {
            args.push(format!(
                "--add-data={}{}.",
                data.display(),
                add_data_separator()
            ));
        } else {
            tracing::debug!("Skipping missing data file {}", data.display());
        }
    }

    for module in &build.hidden_imports {
        args.push(format!("--hidden-import={}", module));
    }
    if build.clean {
        args.push("--clean".to_string());
    }
    args
}

/// Full PyInstaller invocation through the interpreter.
pub fn pyinstaller_command(config: &BootstrapConfig, project_root: &Path) -> CommandSpec {
    CommandSpec::new(&config.interpreter.command)
        .args(["-m", "PyInstaller"])
        .args(pyinstaller_args(&config.build, project_root))
}

/// Where PyInstaller puts the finished executable.
pub fn executable_path(build: &BuildConfig, project_root: &Path) -> PathBuf {
    let file_name = if cfg!(target_os = "windows") {
        format!("{}.exe", build.name)
    } else {
        build.name.clone()
    };
    if build.onefile {
        project_root.join("dist").join(file_name)
    } else {
        project_root.join("dist").join(&build.name).join(file_name)
    }
}

/// Probe the interpreter, then run PyInstaller in `project_root`.
///
/// # Errors
///
/// Returns `MissingFile` if the entry script does not exist and
/// `CommandFailed` if PyInstaller cannot start or exits non-zero.
pub fn build(
    config: &BootstrapConfig,
    project_root: &Path,
    ctx: &BootstrapContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<BuildOutcome> {
    ui.show_header("Building executable");

    let script = project_root.join(&config.build.script);
    if !script.is_file() {
        return Err(BootstrapError::MissingFile { path: script });
    }

    if verify_interpreter(&config.interpreter, ctx, ui)?.is_none() {
        return Ok(BuildOutcome::InterpreterMissing);
    }

    for data in &config.build.data_files {
        if !project_root.join(data).is_file() {
            ui.warning(&format!("{} not found; building without it", data.display()));
        }
    }

    let spec = pyinstaller_command(config, project_root);
    ui.message(&format!("Packaging {} as {}...", config.build.script.display(), config.build.name));
    if ui.output_mode().shows_command_lines() {
        ui.show_hint(&format!("$ {}", spec));
    }

    let options = CommandOptions {
        cwd: Some(project_root.to_path_buf()),
        ..CommandOptions::inherited()
    };
    let result = (ctx.run_command)(&spec, &options)?;
    if !result.success {
        return Err(BootstrapError::CommandFailed {
            command: spec.to_string(),
            code: result.exit_code,
        });
    }

    let executable = executable_path(&config.build, project_root);
    tracing::debug!("Built {}", executable.display());
    ui.success(&format!("Built {}", executable.display()));
    Ok(BuildOutcome::Built { executable })
}
