//! Configuration file discovery and loading.
//!
//! No file is required: with nothing on disk the built-in defaults apply.

use crate::config::merger::merge_configs;
use crate::config::schema::BootstrapConfig;
use crate::config::validator::validate;
use crate::error::{BootstrapError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = ".serial-bootstrap.yml";

/// Directory under the home directory holding the user config.
pub const USER_CONFIG_DIR: &str = ".serial-bootstrap";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.serial-bootstrap/config.yml`)
/// 2. Project config (`.serial-bootstrap.yml`)
/// 3. Explicit `--config` file
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config.
    pub user_global: Option<PathBuf>,

    /// Project config.
    pub project: Option<PathBuf>,

    /// File named on the command line. Kept even if it does not exist so
    /// loading can report it.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> Self {
        Self::discover_with_home(project_root, dirs::home_dir().as_deref(), explicit)
    }

    /// Discover config files using a specific home directory.
    pub fn discover_with_home(
        project_root: &Path,
        home: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Self {
        let user_global = home
            .map(|h| h.join(USER_CONFIG_DIR).join("config.yml"))
            .filter(|p| p.is_file());
        let project = Some(project_root.join(PROJECT_CONFIG_FILE)).filter(|p| p.is_file());

        Self {
            user_global,
            project,
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// Returns all config paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Load a single file as a raw YAML value.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if it is not valid YAML.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BootstrapError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BootstrapError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| BootstrapError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load, merge and validate every discovered layer.
pub fn load_from_paths(paths: &ConfigPaths) -> Result<BootstrapConfig> {
    let mut layers = Vec::new();
    for path in paths.all() {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    let report_path = paths
        .all()
        .last()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));

    let config: BootstrapConfig =
        serde_yaml::from_value(merge_configs(layers)).map_err(|e| {
            BootstrapError::ConfigParseError {
                path: report_path,
                message: e.to_string(),
            }
        })?;

    validate(&config)?;
    Ok(config)
}

/// Load configuration for a project, with an optional explicit file on top.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<BootstrapConfig> {
    load_from_paths(&ConfigPaths::discover(project_root, explicit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn discover(project: &TempDir, home: &TempDir, explicit: Option<&Path>) -> ConfigPaths {
        ConfigPaths::discover_with_home(project.path(), Some(home.path()), explicit)
    }

    #[test]
    fn no_files_yields_defaults() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();

        let config = load_from_paths(&discover(&project, &home, None)).unwrap();

        assert_eq!(config, BootstrapConfig::default());
    }

    #[test]
    fn project_file_overrides_defaults() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(
            project.path().join(PROJECT_CONFIG_FILE),
            "interpreter:\n  command: python3\n",
        )
        .unwrap();

        let config = load_from_paths(&discover(&project, &home, None)).unwrap();

        assert_eq!(config.interpreter.command, "python3");
        assert_eq!(config.installer.command, "pip");
    }

    #[test]
    fn project_file_overrides_user_file() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let user_dir = home.path().join(USER_CONFIG_DIR);
        fs::create_dir_all(&user_dir).unwrap();
        fs::write(
            user_dir.join("config.yml"),
            "installer:\n  command: pip3\nfinish:\n  pause: false\n",
        )
        .unwrap();
        fs::write(
            project.path().join(PROJECT_CONFIG_FILE),
            "installer:\n  command: uv\n  args: [pip, install]\n",
        )
        .unwrap();

        let paths = discover(&project, &home, None);
        assert_eq!(paths.all().len(), 2);

        let config = load_from_paths(&paths).unwrap();
        assert_eq!(config.installer.command, "uv");
        assert_eq!(config.installer.args, vec!["pip", "install"]);
        assert!(!config.finish.pause);
    }

    #[test]
    fn explicit_file_has_highest_priority() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(
            project.path().join(PROJECT_CONFIG_FILE),
            "finish:\n  hint: from-project\n",
        )
        .unwrap();
        let explicit = project.path().join("custom.yml");
        fs::write(&explicit, "finish:\n  hint: from-explicit\n").unwrap();

        let config = load_from_paths(&discover(&project, &home, Some(&explicit))).unwrap();

        assert_eq!(config.finish.hint, "from-explicit");
    }

    #[test]
    fn missing_explicit_file_is_config_not_found() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let explicit = project.path().join("nope.yml");

        let err = load_from_paths(&discover(&project, &home, Some(&explicit))).unwrap_err();

        assert!(matches!(err, BootstrapError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "packages: [unclosed").unwrap();

        let err = load_from_paths(&discover(&project, &home, None)).unwrap_err();

        assert!(matches!(err, BootstrapError::ConfigParseError { .. }));
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "interpretr: {}\n").unwrap();

        let err = load_from_paths(&discover(&project, &home, None)).unwrap_err();

        assert!(matches!(err, BootstrapError::ConfigParseError { .. }));
    }

    #[test]
    fn empty_package_list_fails_validation() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "packages: []\n").unwrap();

        let err = load_from_paths(&discover(&project, &home, None)).unwrap_err();

        assert!(matches!(err, BootstrapError::ConfigValidationError { .. }));
    }

    #[test]
    fn empty_project_file_is_ignored() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "").unwrap();

        let config = load_from_paths(&discover(&project, &home, None)).unwrap();

        assert_eq!(config, BootstrapConfig::default());
    }
}
