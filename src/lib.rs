//! serial-bootstrap - Dependency setup for the serial tool.
//!
//! Checks that a Python interpreter is reachable, hands each required
//! package to the package installer, and tells the user how to start the
//! tool. It can also bundle the tool into a standalone executable with
//! PyInstaller.
//!
//! # Modules
//!
//! - [`bootstrap`] - Interpreter probe, package installs, completion message
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Layered YAML configuration
//! - [`error`] - Error types and result aliases
//! - [`packaging`] - PyInstaller build
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output, spinners, keypress wait
//!
//! # Example
//!
//! ```
//! use serial_bootstrap::config::{BootstrapConfig, PackageSpec};
//! use serial_bootstrap::bootstrap::install_command;
//!
//! let config = BootstrapConfig::default();
//! let spec = install_command(&config.installer, &PackageSpec::new("pyserial"));
//! assert_eq!(spec.to_string(), "pip install pyserial");
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod packaging;
pub mod shell;
pub mod ui;

pub use error::{BootstrapError, Result};
