//! Terminal-sized window output.
//!
//! Queries the terminal dimensions, clears the screen and prints a window
//! that fills it, less the requested shrink amounts.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use tracing::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::window::{render, Horizontal, Vertical};

/// Current terminal size as (columns, rows).
///
/// Asks the controlling terminal first and falls back to crossterm's query,
/// which also consults `COLUMNS`/`LINES` style sources on some platforms.
pub fn terminal_dimensions() -> Result<(u16, u16)> {
    if let Some((terminal_size::Width(cols), terminal_size::Height(rows))) =
        terminal_size::terminal_size()
    {
        return Ok((cols, rows));
    }
    crossterm::terminal::size().map_err(|e| {
        debug!(error = %e, "crossterm size query failed");
        Error::TerminalSize
    })
}

/// Queue a full-screen clear and move the cursor home.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Clear the terminal.
#[cfg(not(tarpaulin_include))]
pub fn clear_console() -> Result<()> {
    let mut stdout = io::stdout().lock();
    clear_screen(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Clear `out` and write a window sized to `terminal` minus the shrinks.
///
/// Shrinks are not validated: negative values grow the window past the
/// terminal edge, and shrinks larger than the terminal produce a
/// degenerate window.
///
/// # Arguments
/// * `out` - Destination for the clear sequence and the window
/// * `terminal` - Terminal size as (columns, rows)
/// * `lines` - Rows of text for the window
/// * `width_shrink` - Columns to subtract from the terminal width
/// * `height_shrink` - Rows to subtract from the terminal height
/// * `horizontal` - Horizontal justification
/// * `vertical` - Vertical justification
/// * `border` - Frame color
#[allow(clippy::too_many_arguments)]
pub fn print_window_to<W: Write, S: AsRef<str>>(
    out: &mut W,
    terminal: (u16, u16),
    lines: &[S],
    width_shrink: i64,
    height_shrink: i64,
    horizontal: Horizontal,
    vertical: Vertical,
    border: Color,
) -> io::Result<()> {
    let (cols, rows) = terminal;
    let width = i64::from(cols) - width_shrink;
    let height = i64::from(rows) - height_shrink;
    debug!(cols, rows, width, height, "fitting window to terminal");

    clear_screen(out)?;
    let window = render(lines, width, height, horizontal, vertical, border);
    writeln!(out, "{}", window)?;
    out.flush()
}

/// Clear the screen and print a window filling the terminal.
#[cfg(not(tarpaulin_include))]
pub fn print_window<S: AsRef<str>>(
    lines: &[S],
    width_shrink: i64,
    height_shrink: i64,
    horizontal: Horizontal,
    vertical: Vertical,
    border: Color,
) -> Result<()> {
    let terminal = terminal_dimensions()?;
    let mut stdout = io::stdout().lock();
    print_window_to(
        &mut stdout,
        terminal,
        lines,
        width_shrink,
        height_shrink,
        horizontal,
        vertical,
        border,
    )?;
    Ok(())
}
