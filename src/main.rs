//! printkit CLI entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use printkit::{Horizontal, Vertical};

/// Environment variable holding the log filter (e.g. `debug`, `printkit=trace`).
const LOG_ENV: &str = "PRINTKIT_LOG";

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("PRINTKIT_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PRINTKIT_BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "printkit")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Terminal printing helpers: colors, truncated paths and text windows")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clear the screen and print a window filling the terminal
    Window {
        /// Lines of text to place in the window
        lines: Vec<String>,
        /// Columns to subtract from the terminal width (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        width_shrink: Option<i64>,
        /// Rows to subtract from the terminal height (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        height_shrink: Option<i64>,
        #[command(flatten)]
        style: WindowStyle,
    },

    /// Print a window of an explicit size without clearing the screen
    Render {
        /// Lines of text to place in the window
        lines: Vec<String>,
        /// Total width including the border
        #[arg(long)]
        width: u16,
        /// Total height including the border
        #[arg(long)]
        height: u16,
        #[command(flatten)]
        style: WindowStyle,
    },

    /// Print text in a color
    Color {
        /// Text to print
        text: String,
        /// Color name or abbreviation (e.g. red, r, "bright green", bg)
        #[arg(short, long, default_value = "default")]
        color: String,
    },

    /// Prompt in color and echo the line read from stdin
    Ask {
        /// Prompt text
        prompt: String,
        /// Color name or abbreviation
        #[arg(short, long, default_value = "default")]
        color: String,
    },

    /// Print files truncated relative to a base directory
    Files {
        /// Base directory
        base: String,
        /// Files to print
        files: Vec<String>,
    },

    /// Show the effective configuration as TOML
    Config,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Justification and border options shared by window commands.
///
/// Unset options fall back to the config file.
#[derive(clap::Args, Debug, Default)]
pub struct WindowStyle {
    /// Horizontal justification
    #[arg(short = 'x', long, value_enum)]
    pub horizontal: Option<Horizontal>,
    /// Vertical justification
    #[arg(short = 'y', long, value_enum)]
    pub vertical: Option<Vertical>,
    /// Border color name or abbreviation
    #[arg(short, long)]
    pub color: Option<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Window {
            lines,
            width_shrink,
            height_shrink,
            style,
        } => commands::window::handle_window(&lines, width_shrink, height_shrink, &style),
        Commands::Render {
            lines,
            width,
            height,
            style,
        } => commands::window::handle_render(&lines, width, height, &style),
        Commands::Color { text, color } => commands::color::handle_color(&text, &color),
        Commands::Ask { prompt, color } => commands::color::handle_ask(&prompt, &color),
        Commands::Files { base, files } => commands::files::handle_files(&base, &files),
        Commands::Config => commands::config::handle_show(),
        Commands::Completions { shell } => {
            commands::completions::handle_completions(shell, &mut Cli::command())
        }
    }
}
