//! venv CLI - take the pain out of python virtual environments
//!
//! Usage: venv [-c|--create] [-a|--abort]

mod cli;
mod ui;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use venv::logging::init_logging;
use venv::{Config, LocalFs, ProcessRunner, SelectPrompter, SetupUseCase};

use crate::cli::Cli;
use crate::ui::output::{ConsoleEventSink, Printer};

/// Commit hash baked in at build time, if the build provided one
const COMMIT: &str = match option_env!("VENV_GIT_COMMIT") {
    Some(commit) => commit,
    None => "",
};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::FAILURE,
            };
        }
    };

    let config = Config::from_env();
    init_logging(&config);
    debug!(args = ?cli, "venv v{} starting", env!("CARGO_PKG_VERSION"));

    let printer = Printer::new(ui::terminal::detect_capabilities());
    let err_printer = Printer::new(ui::terminal::detect_stderr_capabilities());

    if cli.version {
        print_version(&printer);
        return ExitCode::SUCCESS;
    }

    match run(&cli, printer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, &err_printer);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, printer: Printer) -> Result<()> {
    let cwd = std::env::current_dir().context("could not get cwd")?;
    debug!(cwd = %cwd.display(), "project root");

    let use_case = SetupUseCase::new(
        &cwd,
        LocalFs::new(&cwd),
        ProcessRunner::new(),
        SelectPrompter::new(),
    );
    let sink = ConsoleEventSink::new(printer, std::io::stdout());

    let outcome = use_case.execute(cli.preset(), &sink)?;
    debug!(outcome = ?outcome, "finished");
    Ok(())
}

fn print_version(printer: &Printer) {
    println!("{}", printer.labelled("venv version", env!("CARGO_PKG_VERSION")));
    println!("{}", printer.labelled("commit", COMMIT));
}
