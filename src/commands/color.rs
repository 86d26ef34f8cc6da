//! Color subcommands handler

use anyhow::Result;

use printkit::{color_input, color_print, Color};

/// Print text in the given color.
pub fn handle_color(text: &str, color: &str) -> Result<()> {
    color_print(text, Color::resolve(color))?;
    Ok(())
}

/// Prompt in color, read a line and echo it back.
pub fn handle_ask(prompt: &str, color: &str) -> Result<()> {
    let answer = color_input(prompt, Color::resolve(color))?;
    println!("{}", answer);
    Ok(())
}
