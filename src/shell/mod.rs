//! External command execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult, CommandSpec};
pub use platform::{is_ci, is_ci_with_env};
