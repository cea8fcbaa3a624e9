//! CLI argument parsing using clap.
//!
//! Commands are not clap subcommands: the keyword is matched
//! case-insensitively by [`crate::command::Keyword`], so the whole trailing
//! argument vector is captured as-is.

use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use super::commands::help::help_text;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Record numbers into text files and summarize them
#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record numbers into text files and summarize them",
    styles = clap_cargo_style(),
    override_help = help_text()
)]
pub struct Cli {
    /// Path to a settings.toml file
    #[arg(short, long, env = "TALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Command keyword and its arguments; empty starts interactive mode
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}
