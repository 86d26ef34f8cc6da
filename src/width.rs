//! Visible width of text containing color sequences.
//!
//! Only SGR sequences of the form `ESC [ <digits> m` are recognized, which
//! covers every code produced by [`crate::color`]. Each remaining `char`
//! counts as one column.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn color_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\x1b\[[0-9]+m").expect("color code pattern is valid"))
}

/// Remove all `ESC [ <digits> m` sequences from `text`.
///
/// Borrows the input when there is nothing to strip.
pub fn strip_color_codes(text: &str) -> Cow<'_, str> {
    color_code_pattern().replace_all(text, "")
}

/// Number of columns `text` occupies once color sequences are removed.
pub fn visible_length(text: &str) -> usize {
    strip_color_codes(text).chars().count()
}
