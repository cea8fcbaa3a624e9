//! Command dispatch for interactive and batch mode.

use console::style;
use std::io::{self, BufRead, Write};

use super::commands::{help, record, summary};
use crate::command::Command;
use crate::config::Settings;
use crate::debug_event;
use crate::error::{ExitCode, TallyError, TallyResult};

const PROMPT: &str = "> ";
const BANNER: &str = "----- tally: numeric records -----";

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs commands against one output sink.
pub struct Dispatcher<'a, W: Write> {
    settings: &'a Settings,
    out: W,
}

impl<'a, W: Write> Dispatcher<'a, W> {
    pub fn new(settings: &'a Settings, out: W) -> Self {
        Self { settings, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Execute one parsed command.
    pub fn execute(&mut self, command: &Command) -> TallyResult<Flow> {
        debug_event!("dispatch", "command", "{}", command.keyword());

        match command {
            Command::Help => help::run(&mut self.out)?,
            Command::Quit => {
                help::run(&mut self.out)?;
                return Ok(Flow::Quit);
            }
            Command::Record { path, values } => {
                record::run(self.settings, path, values, &mut self.out)?;
            }
            Command::Summary { path } => {
                summary::run(self.settings, path, &mut self.out)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Read commands line by line until QUIT or end of input.
    ///
    /// Command errors are reported and the loop goes on. Bytes that are not
    /// UTF-8 are replaced, so only I/O failures on the input or output end the
    /// session early.
    pub fn run_interactive<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        writeln!(self.out, "{}", style(BANNER).bold())?;
        writeln!(self.out, "Type HELP to view usage.")?;

        let mut buf = Vec::new();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.out)?;
                debug_event!("dispatch", "end of input");
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            match Command::parse_line(&line).and_then(|command| self.execute(&command)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => self.report(&e, true)?,
            }
        }
        Ok(())
    }

    /// Perform the single command in `args` and map the outcome to an exit code.
    pub fn run_batch<S: AsRef<str>>(&mut self, args: &[S]) -> io::Result<ExitCode> {
        let result = Command::from_tokens(args).and_then(|command| self.execute(&command));
        let code = match result {
            Ok(_) => ExitCode::Success,
            Err(e) => {
                self.report(&e, false)?;
                e.exit_code()
            }
        };
        self.out.flush()?;
        Ok(code)
    }

    fn report(&mut self, err: &TallyError, interactive: bool) -> io::Result<()> {
        if let TallyError::Io(io_err) = err {
            tracing::warn!("[dispatch] I/O failure: {io_err}");
        }
        writeln!(self.out, "{} {err}", style("Error:").red().bold())?;

        if interactive && matches!(err, TallyError::InvalidCommand(_)) {
            help::run(&mut self.out)?;
        }
        Ok(())
    }
}
