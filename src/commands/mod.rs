//! Subcommand handlers for the printkit CLI

pub mod color;
pub mod completions;
pub mod config;
pub mod files;
pub mod window;
