use anyhow::Context;
use clap::Parser;
use std::io;

use tally::cli::{Cli, Dispatcher};
use tally::{ExitCode, Settings, TallyError, logging};

fn main() {
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            e.downcast_ref::<TallyError>()
                .map_or(ExitCode::GeneralError, TallyError::exit_code)
        }
    };

    std::process::exit(i32::from(code));
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = Settings::load(cli.config.as_deref())?;
    logging::init_with_config(&settings.logging);
    tracing::debug!("[main] settings: {settings:?}");

    let stdout = io::stdout();
    let mut dispatcher = Dispatcher::new(&settings, stdout.lock());

    if cli.command.is_empty() {
        dispatcher
            .run_interactive(io::stdin().lock())
            .context("interactive session failed")?;
        Ok(ExitCode::Success)
    } else {
        Ok(dispatcher
            .run_batch(&cli.command)
            .context("failed to write output")?)
    }
}
