//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{BuildArgs, Cli, Commands, CompletionsArgs, ConfigArgs, InstallArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
