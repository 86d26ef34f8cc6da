//! Horizontal and vertical justification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Horizontal placement of each line inside the window.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Horizontal {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical placement of the block of lines inside the window.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Unrecognized justification name (strict parsing only).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown justification '{0}'")]
pub struct ParseJustifyError(pub String);

impl Horizontal {
    /// Lenient lookup: "center" and "right" are recognized (any case),
    /// everything else is left justification.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Self::Left)
    }

    /// Columns placed before the text, given the free columns on the row.
    ///
    /// `spaces` may be negative when the text overflows; center uses floor
    /// division so the remainder goes to the right.
    pub(crate) fn leading(self, spaces: i64) -> i64 {
        match self {
            Self::Left => 0,
            Self::Center => spaces.div_euclid(2),
            Self::Right => spaces,
        }
    }
}

impl Vertical {
    /// Lenient lookup: "center" and "bottom" are recognized (any case),
    /// everything else is top justification.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Self::Top)
    }

    /// Blank rows placed above the content, given the free rows.
    pub(crate) fn leading(self, empty_rows: i64) -> i64 {
        match self {
            Self::Top => 0,
            Self::Center => empty_rows.div_euclid(2),
            Self::Bottom => empty_rows,
        }
    }
}

impl FromStr for Horizontal {
    type Err = ParseJustifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(ParseJustifyError(s.to_string())),
        }
    }
}

impl FromStr for Vertical {
    type Err = ParseJustifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => Err(ParseJustifyError(s.to_string())),
        }
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        })
    }
}
