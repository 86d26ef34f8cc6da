//! Shell completions handler

use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Write a completion script for `shell` to stdout.
pub fn handle_completions(shell: Shell, cmd: &mut Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut io::stdout());
    Ok(())
}
