//! Files subcommand handler

use anyhow::{Context, Result};

use printkit::print_files;

/// Print each file truncated relative to `base`.
pub fn handle_files(base: &str, files: &[String]) -> Result<()> {
    print_files(base, files).context("Failed to truncate file paths")?;
    Ok(())
}
