//! Text window layout.
//!
//! Renders lines of text inside a fixed-size ASCII frame:
//!
//! ```text
//! +---------+
//! |         |
//! |  Some   |
//! |  Text!  |
//! |         |
//! +---------+
//! ```
//!
//! - `justify`: horizontal/vertical placement
//! - `render`: frame assembly and padding

mod justify;
mod render;

pub use justify::{Horizontal, ParseJustifyError, Vertical};
pub use render::{render, WindowSpec};
