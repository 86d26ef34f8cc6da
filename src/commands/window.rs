//! Window subcommands handler

use anyhow::{Context, Result};
use std::io::{self, Write};

use printkit::config::WindowConfig;
use printkit::{render, terminal, Color, Config, Horizontal, Vertical};

use crate::WindowStyle;

impl WindowStyle {
    /// Fill unset options from the configured defaults.
    fn resolve(&self, defaults: &WindowConfig) -> (Horizontal, Vertical, Color) {
        let horizontal = self.horizontal.unwrap_or(defaults.horizontal);
        let vertical = self.vertical.unwrap_or(defaults.vertical);
        let border = self
            .color
            .as_deref()
            .map(Color::resolve)
            .unwrap_or_else(|| defaults.border_color());
        (horizontal, vertical, border)
    }
}

/// Clear the screen and print a window fitted to the terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle_window(
    lines: &[String],
    width_shrink: Option<i64>,
    height_shrink: Option<i64>,
    style: &WindowStyle,
) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let (horizontal, vertical, border) = style.resolve(&config.window);

    terminal::print_window(
        lines,
        width_shrink.unwrap_or(config.window.width_shrink),
        height_shrink.unwrap_or(config.window.height_shrink),
        horizontal,
        vertical,
        border,
    )?;
    Ok(())
}

/// Print a window of explicit size.
pub fn handle_render(lines: &[String], width: u16, height: u16, style: &WindowStyle) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let (horizontal, vertical, border) = style.resolve(&config.window);

    let window = render(
        lines,
        i64::from(width),
        i64::from(height),
        horizontal,
        vertical,
        border,
    );
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", window)?;
    Ok(())
}
