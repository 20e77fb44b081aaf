//! CLI argument parsing for forge.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Forge: declarative build template and target configuration loader.
///
/// Configuration documents describe build templates and targets: named,
/// conditionally-specialized bundles of sources, include paths, and build
/// properties, each tagged with a visibility tier (public/private/interface)
/// that controls how it propagates to consumers.
#[derive(Parser, Debug)]
#[command(name = "forge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for forge.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode and validate a configuration document.
    ///
    /// Exits non-zero if the file cannot be read, is not valid YAML,
    /// does not fit the configuration schema, or fails validation.
    Check(CheckArgs),

    /// Decode a configuration document and print a summary.
    ///
    /// Use `--json` for a machine-readable dump of the decoded model.
    Show(ShowArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the configuration document.
    pub path: PathBuf,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to the configuration document.
    pub path: PathBuf,

    /// Print the decoded model as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["forge", "check", "forge.yml"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("forge.yml"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_show_defaults_to_summary() {
        let cli = Cli::try_parse_from(["forge", "show", "forge.yml"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert!(!args.json);
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn parse_show_json() {
        let cli = Cli::try_parse_from(["forge", "show", "forge.yml", "--json"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(Cli::try_parse_from(["forge", "check"]).is_err());
    }
}
