//! printkit - terminal printing helpers
//!
//! - `color`: color names to ANSI codes, colorized print and prompt
//! - `width`: visible width of text with embedded color codes
//! - `window`: bordered, justified text windows
//! - `terminal`: windows fitted to the terminal size
//! - `path`: file paths truncated relative to a base directory
//! - `config`: window defaults from a TOML file
//!
//! # Usage
//!
//! ```
//! use printkit::{render, Color, Horizontal, Vertical};
//!
//! let lines = ["Some", "Text!"];
//! let window = render(&lines, 11, 6, Horizontal::Center, Vertical::Center, Color::Default);
//! assert_eq!(window.lines().count(), 6);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod path;
pub mod terminal;
pub mod width;
pub mod window;

pub use color::{color_code, color_input, color_print, colorize, Color, DEFAULT_COLOR};
pub use config::Config;
pub use error::{Error, Result};
pub use path::{print_files, truncate_path};
pub use terminal::{clear_console, print_window, terminal_dimensions};
pub use width::visible_length;
pub use window::{render, Horizontal, Vertical, WindowSpec};
