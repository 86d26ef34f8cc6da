//! Config subcommand handler

use anyhow::{Context, Result};

use printkit::{colorize, Config, Color};

/// Show the effective configuration as TOML.
///
/// The header line names the file the values came from, or notes that
/// defaults are in effect.
pub fn handle_show() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let toml_str = toml::to_string_pretty(&config)?;

    let source = match Config::config_path() {
        Some(path) if path.exists() => format!("# {}", path.display()),
        _ => "# defaults (no config file)".to_string(),
    };
    println!("{}", colorize(&source, Color::BrightBlack));
    print!("{}", toml_str);
    Ok(())
}
