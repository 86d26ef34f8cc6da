//! Color name lookup and colorized terminal output.
//!
//! Maps color names and their one/two letter abbreviations to ANSI SGR
//! foreground sequences. Lookup never fails: unrecognized names resolve to
//! [`Color::Default`], which emits the reset sequence.

use std::io::{self, BufRead, Write};

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// The terminal's default text color, used for borders and for resetting
/// after colored text.
pub const DEFAULT_COLOR: Color = Color::Default;

/// Foreground colors supported by the color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    #[default]
    Default,
}

impl Color {
    /// Every color in the table, in SGR order.
    pub const ALL: [Color; 17] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
        Color::Default,
    ];

    /// Resolve a color name or abbreviation, ignoring case.
    ///
    /// Accepts full names ("red", "bright green") and abbreviations
    /// ("r", "bg"). Black abbreviates to "k" since "b" is blue.
    /// Anything else resolves to [`Color::Default`].
    pub fn resolve(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "k" | "black" => Self::Black,
            "r" | "red" => Self::Red,
            "g" | "green" => Self::Green,
            "y" | "yellow" => Self::Yellow,
            "b" | "blue" => Self::Blue,
            "m" | "magenta" => Self::Magenta,
            "c" | "cyan" => Self::Cyan,
            "w" | "white" => Self::White,
            "bk" | "bright black" => Self::BrightBlack,
            "br" | "bright red" => Self::BrightRed,
            "bg" | "bright green" => Self::BrightGreen,
            "by" | "bright yellow" => Self::BrightYellow,
            "bb" | "bright blue" => Self::BrightBlue,
            "bm" | "bright magenta" => Self::BrightMagenta,
            "bc" | "bright cyan" => Self::BrightCyan,
            "bw" | "bright white" => Self::BrightWhite,
            _ => Self::Default,
        }
    }

    /// ANSI escape sequence for this color.
    pub fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::BrightBlack => "\x1b[90m",
            Self::BrightRed => "\x1b[91m",
            Self::BrightGreen => "\x1b[92m",
            Self::BrightYellow => "\x1b[93m",
            Self::BrightBlue => "\x1b[94m",
            Self::BrightMagenta => "\x1b[95m",
            Self::BrightCyan => "\x1b[96m",
            Self::BrightWhite => "\x1b[97m",
            Self::Default => ANSI_RESET,
        }
    }

    /// Canonical full name, as accepted by [`Color::resolve`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "bright black",
            Self::BrightRed => "bright red",
            Self::BrightGreen => "bright green",
            Self::BrightYellow => "bright yellow",
            Self::BrightBlue => "bright blue",
            Self::BrightMagenta => "bright magenta",
            Self::BrightCyan => "bright cyan",
            Self::BrightWhite => "bright white",
            Self::Default => "default",
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::resolve(name)
    }
}

/// Look up the escape sequence for a color name.
pub fn color_code(name: &str) -> &'static str {
    Color::resolve(name).code()
}

/// Wrap text in a color sequence followed by a reset.
pub fn colorize(text: &str, color: Color) -> String {
    format!("{}{}{}", color.code(), text, DEFAULT_COLOR.code())
}

/// Write colorized text and a newline.
pub fn write_colored<W: Write>(out: &mut W, text: &str, color: Color) -> io::Result<()> {
    writeln!(out, "{}", colorize(text, color))
}

/// Print colorized text to stdout.
pub fn color_print(text: &str, color: Color) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_colored(&mut stdout, text, color)
}

/// Write a colorized prompt and read one line of input.
///
/// The returned line has its trailing `\n` / `\r\n` removed. End of input
/// yields an empty string.
pub fn read_colored<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    color: Color,
) -> io::Result<String> {
    write!(out, "{}", colorize(prompt, color))?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Prompt on stdout in color and read a line from stdin.
#[cfg(not(tarpaulin_include))]
pub fn color_input(prompt: &str, color: Color) -> io::Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();
    read_colored(&mut input, &mut stdout, prompt, color)
}
