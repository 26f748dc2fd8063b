//! Configuration schema definitions.
//!
//! These structs map to the YAML configuration file format. Every field has
//! a default, and the defaults reproduce the stock setup for the serial tool:
//! probe `python --version`, then `pip install` pyserial, matplotlib and
//! pyreadline3.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Interpreter probe settings.
    pub interpreter: InterpreterConfig,

    /// Package installer invocation.
    pub installer: InstallerConfig,

    /// Packages to install, in order.
    pub packages: Vec<PackageSpec>,

    /// Completion message settings.
    pub finish: FinishConfig,

    /// Executable build settings.
    pub build: BuildConfig,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            interpreter: InterpreterConfig::default(),
            installer: InstallerConfig::default(),
            packages: default_packages(),
            finish: FinishConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

/// How to find the interpreter and where to send the user when it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterpreterConfig {
    /// Interpreter executable, resolved through PATH.
    pub command: String,

    /// Arguments that make the interpreter print its version.
    pub version_args: Vec<String>,

    /// Where to download the interpreter.
    pub download_url: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            command: "python".to_string(),
            version_args: vec!["--version".to_string()],
            download_url: "https://www.python.org/downloads/".to_string(),
        }
    }
}

/// The package installer command; the package name is appended as the last argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Installer executable.
    pub command: String,

    /// Arguments placed before the package name.
    pub args: Vec<String>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            command: "pip".to_string(),
            args: vec!["install".to_string()],
        }
    }
}

/// One package to install.
///
/// Accepts either a bare name (`- numpy`) or a mapping with `name`,
/// `purpose` and `optional`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PackageEntry")]
pub struct PackageSpec {
    /// Registry name passed to the installer.
    pub name: String,

    /// What the serial tool uses it for, shown in the install label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    /// Whether the tool runs without it. Informational only.
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,
}

impl PackageSpec {
    /// Create a required package with no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purpose: None,
            optional: false,
        }
    }

    /// Set the description shown in the install label.
    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Mark the package as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Label printed before the installer runs.
    pub fn label(&self) -> String {
        match (&self.purpose, self.optional) {
            (Some(purpose), true) => format!("{} ({}, optional)", self.name, purpose),
            (Some(purpose), false) => format!("{} ({})", self.name, purpose),
            (None, true) => format!("{} (optional)", self.name),
            (None, false) => self.name.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PackageEntry {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        purpose: Option<String>,
        #[serde(default)]
        optional: bool,
    },
}

impl From<PackageEntry> for PackageSpec {
    fn from(entry: PackageEntry) -> Self {
        match entry {
            PackageEntry::Name(name) => PackageSpec::new(name),
            PackageEntry::Full {
                name,
                purpose,
                optional,
            } => PackageSpec {
                name,
                purpose,
                optional,
            },
        }
    }
}

/// Packages the serial tool imports.
pub fn default_packages() -> Vec<PackageSpec> {
    vec![
        PackageSpec::new("pyserial").with_purpose("serial port access"),
        PackageSpec::new("matplotlib")
            .with_purpose("live data plotting")
            .optional(),
        PackageSpec::new("pyreadline3")
            .with_purpose("command history and line editing")
            .optional(),
    ]
}

/// What to print once installation is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinishConfig {
    /// Command the user should run next.
    pub hint: String,

    /// Wait for a keypress before exiting.
    pub pause: bool,
}

impl Default for FinishConfig {
    fn default() -> Self {
        Self {
            hint: "python serial_tool.py".to_string(),
            pause: true,
        }
    }
}

/// PyInstaller settings for bundling the serial tool into one executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Entry script, relative to the project root.
    pub script: PathBuf,

    /// Name of the produced executable.
    pub name: String,

    /// Bundle into a single file.
    pub onefile: bool,

    /// Build a console (not windowed) application.
    pub console: bool,

    /// Icon argument; `NONE` disables the default icon.
    pub icon: String,

    /// Files bundled next to the executable when they exist.
    pub data_files: Vec<PathBuf>,

    /// Modules PyInstaller cannot discover on its own.
    pub hidden_imports: Vec<String>,

    /// Remove PyInstaller caches before building.
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from("serial_tool.py"),
            name: "SerialTool".to_string(),
            onefile: true,
            console: true,
            icon: "NONE".to_string(),
            data_files: vec![PathBuf::from("README.md")],
            hidden_imports: vec![
                "serial.serialposix".to_string(),
                "serial.serialwin32".to_string(),
            ],
            clean: true,
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_install_serial_tool_dependencies_in_order() {
        let config = BootstrapConfig::default();
        let names: Vec<_> = config.packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["pyserial", "matplotlib", "pyreadline3"]);
    }

    #[test]
    fn defaults_probe_python_and_use_pip() {
        let config = BootstrapConfig::default();
        assert_eq!(config.interpreter.command, "python");
        assert_eq!(config.interpreter.version_args, vec!["--version"]);
        assert_eq!(config.installer.command, "pip");
        assert_eq!(config.installer.args, vec!["install"]);
        assert_eq!(config.finish.hint, "python serial_tool.py");
        assert!(config.finish.pause);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config: BootstrapConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, BootstrapConfig::default());
    }

    #[test]
    fn packages_accept_bare_names_and_mappings() {
        let yaml = r#"
packages:
  - pyserial
  - name: numpy
    purpose: math
    optional: true
"#;
        let config: BootstrapConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.packages[0], PackageSpec::new("pyserial"));
        assert_eq!(
            config.packages[1],
            PackageSpec::new("numpy").with_purpose("math").optional()
        );
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let result: Result<BootstrapConfig, _> = serde_yaml::from_str("packagez: []");
        assert!(result.is_err());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: BootstrapConfig =
            serde_yaml::from_str("interpreter:\n  command: python3\n").unwrap();
        assert_eq!(config.interpreter.command, "python3");
        assert_eq!(config.interpreter.version_args, vec!["--version"]);
    }

    #[test]
    fn label_includes_purpose_and_optional_marker() {
        assert_eq!(PackageSpec::new("pyserial").label(), "pyserial");
        assert_eq!(
            PackageSpec::new("pyserial")
                .with_purpose("serial port access")
                .label(),
            "pyserial (serial port access)"
        );
        assert_eq!(
            PackageSpec::new("matplotlib")
                .with_purpose("live data plotting")
                .optional()
                .label(),
            "matplotlib (live data plotting, optional)"
        );
        assert_eq!(
            PackageSpec::new("pyreadline3").optional().label(),
            "pyreadline3 (optional)"
        );
    }

    #[test]
    fn build_defaults_bundle_serial_tool() {
        let build = BuildConfig::default();
        assert_eq!(build.script, PathBuf::from("serial_tool.py"));
        assert_eq!(build.name, "SerialTool");
        assert_eq!(
            build.hidden_imports,
            vec!["serial.serialposix", "serial.serialwin32"]
        );
    }

    #[test]
    fn serializes_round_trip_through_yaml() {
        let config = BootstrapConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: BootstrapConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
