//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// serial-bootstrap - Install the serial tool's Python dependencies.
#[derive(Debug, Parser)]
#[command(name = "serial-bootstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Extra config file, applied on top of user and project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the interpreter and install packages (default if no command specified)
    Install(InstallArgs),

    /// Package the serial tool into a standalone executable with PyInstaller
    Build(BuildArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Print installer commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Exit without waiting for a keypress
    #[arg(long)]
    pub no_pause: bool,
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildArgs {
    /// Entry script to package (overrides build.script)
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Name of the executable (overrides build.name)
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["serial-bootstrap"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn install_flags_parse() {
        let cli =
            Cli::try_parse_from(["serial-bootstrap", "install", "--dry-run", "--no-pause"]).unwrap();
        match cli.command {
            Some(Commands::Install(args)) => {
                assert!(args.dry_run);
                assert!(args.no_pause);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "serial-bootstrap",
            "build",
            "--name",
            "Tool",
            "--config",
            "extra.yml",
            "-q",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("extra.yml")));
        match cli.command {
            Some(Commands::Build(args)) => assert_eq!(args.name.as_deref(), Some("Tool")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn completions_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["serial-bootstrap", "completions", "tcsh"]).is_err());
    }
}
