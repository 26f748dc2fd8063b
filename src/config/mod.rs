//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use serial_bootstrap::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".serial-bootstrap.yml"),
//!     "installer:\n  command: pip3\n",
//! )
//! .unwrap();
//!
//! let explicit = temp.path().join(".serial-bootstrap.yml");
//! let config = load_config(temp.path(), Some(&explicit)).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.installer.command, "pip3");
//! ```
//!
//! # Configuration File Locations
//!
//! Layers are merged in this order, later winning:
//! 1. User global config (`~/.serial-bootstrap/config.yml`)
//! 2. Project config (`.serial-bootstrap.yml`)
//! 3. The file passed with `--config`

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{
    default_packages, BootstrapConfig, BuildConfig, FinishConfig, InstallerConfig,
    InterpreterConfig, PackageSpec,
};

pub use loader::{
    load_config, load_config_value, load_from_paths, ConfigPaths, PROJECT_CONFIG_FILE,
    USER_CONFIG_DIR,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};
