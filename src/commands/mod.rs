//! Command implementations for forge.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod show;

use crate::cli::{CheckArgs, Command};
use crate::config;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => cmd_check(args),
        Command::Show(args) => show::cmd_show(args),
    }
}

/// Execute the `forge check` command.
///
/// Decodes the document, runs post-decode validation, and prints a
/// one-line summary on success.
fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = config::read(&args.path)?;
    config.validate()?;

    println!(
        "ok: {} ({} templates, {} targets)",
        config.name,
        config.templates.len(),
        config.targets.len()
    );
    Ok(())
}
