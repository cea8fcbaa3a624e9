//! HELP command: static usage text.

use std::io::{self, Write};

use crate::command::Keyword;

/// Width the command keywords are right-aligned to.
const KEYWORD_WIDTH: usize = 9;

fn description(keyword: Keyword) -> &'static str {
    match keyword {
        Keyword::Help => "Print this help text",
        Keyword::Record => "Append values to a file: RECORD <file.txt> <value> [<value> ...]",
        Keyword::Summary => "Show count, min, max and average of a file: SUMMARY <file.txt>",
        Keyword::Quit => "Print this help text and leave interactive mode",
    }
}

/// Usage text shown by HELP, QUIT, invalid input and `--help`.
pub fn help_text() -> String {
    let mut help = String::new();
    help.push_str("Usage: tally [OPTIONS] [COMMAND [ARGS...]]\n");
    help.push_str("Without a command, tally reads commands from standard input until QUIT.\n\n");
    help.push_str("Commands (case-insensitive):\n");
    for keyword in Keyword::ALL {
        help.push_str(&format!(
            "{:>KEYWORD_WIDTH$}  {}\n",
            keyword.as_str(),
            description(keyword)
        ));
    }
    help.push_str("\nOptions:\n");
    help.push_str("  -c, --config <CONFIG>  Path to a settings.toml file\n");
    help.push_str("  -h, --help             Print help\n");
    help.push_str("  -V, --version          Print version\n");
    help
}

/// Run help command.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", help_text())
}
