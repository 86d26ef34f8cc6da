//! Bordered text window rendering.
//!
//! A window is a `+---+` frame with `|` sides. Each content row gets one
//! column of padding on both sides, so text has `width - 4` columns to
//! itself. Free rows and columns are distributed according to the
//! justification.
//!
//! Rendering never fails. Arithmetic is signed and negative repeat counts
//! emit nothing, so text wider than the window is written in full and pushes
//! the right border out instead of being clipped.

use tracing::trace;

use super::justify::{Horizontal, Vertical};
use crate::color::{Color, DEFAULT_COLOR};
use crate::width::visible_length;

/// Everything needed to render one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub lines: Vec<String>,
    pub width: i64,
    pub height: i64,
    pub horizontal: Horizontal,
    pub vertical: Vertical,
    pub border: Color,
}

impl WindowSpec {
    /// Centered window with the default border color.
    pub fn new<I, S>(lines: I, width: i64, height: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            width,
            height,
            horizontal: Horizontal::default(),
            vertical: Vertical::default(),
            border: DEFAULT_COLOR,
        }
    }

    pub fn horizontal(mut self, horizontal: Horizontal) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn vertical(mut self, vertical: Vertical) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn border(mut self, border: Color) -> Self {
        self.border = border;
        self
    }

    /// Render the window to a single newline-joined string.
    pub fn render(&self) -> String {
        render(
            &self.lines,
            self.width,
            self.height,
            self.horizontal,
            self.vertical,
            self.border,
        )
    }
}

/// Render `lines` inside a `width` x `height` bordered window.
///
/// # Arguments
/// * `lines` - Rows of text, rendered in order; surrounding whitespace is trimmed
/// * `width` - Total columns including the border
/// * `height` - Total rows including the border
/// * `horizontal` - Placement of each line between the side borders
/// * `vertical` - Placement of the block of lines between top and bottom
/// * `border` - Color of the frame
///
/// # Returns
/// The window rows joined with `\n`, without a trailing newline
pub fn render<S: AsRef<str>>(
    lines: &[S],
    width: i64,
    height: i64,
    horizontal: Horizontal,
    vertical: Vertical,
    border: Color,
) -> String {
    let empty_rows = (height - 2) - lines.len() as i64;
    let top_buffer = vertical.leading(empty_rows);
    let bottom_buffer = empty_rows - top_buffer;
    trace!(width, height, empty_rows, top_buffer, bottom_buffer, "rendering window");

    let mut output = String::with_capacity(
        (width.max(0) as usize + 16) * (height.max(0) as usize + lines.len()),
    );

    push_edge(&mut output, width, border);
    for _ in 0..top_buffer {
        output.push('\n');
        push_blank(&mut output, width, border);
    }
    for line in lines {
        output.push('\n');
        push_content(&mut output, line.as_ref(), width, horizontal, border);
    }
    for _ in 0..bottom_buffer {
        output.push('\n');
        push_blank(&mut output, width, border);
    }
    output.push('\n');
    push_edge(&mut output, width, border);

    output
}

/// Append `ch` `count` times; non-positive counts append nothing.
fn push_repeated(buf: &mut String, ch: char, count: i64) {
    for _ in 0..count {
        buf.push(ch);
    }
}

/// Top or bottom border: `+----+`
fn push_edge(buf: &mut String, width: i64, border: Color) {
    buf.push_str(border.code());
    buf.push('+');
    push_repeated(buf, '-', width - 2);
    buf.push('+');
    buf.push_str(DEFAULT_COLOR.code());
}

/// Empty interior row: `|    |`
fn push_blank(buf: &mut String, width: i64, border: Color) {
    buf.push_str(border.code());
    buf.push('|');
    push_repeated(buf, ' ', width - 2);
    buf.push('|');
    buf.push_str(DEFAULT_COLOR.code());
}

/// Content row: `| <left>text<right> |`
fn push_content(buf: &mut String, line: &str, width: i64, horizontal: Horizontal, border: Color) {
    let text = line.trim();
    let spaces = (width - 4) - visible_length(text) as i64;
    let left_buffer = horizontal.leading(spaces);
    let right_buffer = spaces - left_buffer;

    buf.push_str(border.code());
    buf.push('|');
    buf.push_str(DEFAULT_COLOR.code());
    buf.push(' ');
    push_repeated(buf, ' ', left_buffer);
    buf.push_str(text);
    push_repeated(buf, ' ', right_buffer);
    buf.push(' ');
    buf.push_str(border.code());
    buf.push('|');
    buf.push_str(DEFAULT_COLOR.code());
}
