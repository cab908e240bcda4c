//! `nexus` command-line entry point.
use std::process::ExitCode;

use clap::Parser;
use nexus::cli::{Cli, Command};
use nexus::{commands, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    if matches!(args.command, Command::Version) {
        commands::version::run();
        return ExitCode::SUCCESS;
    }

    let command = args.command.name();
    logging::init_subscriber(args.debug, command);
    let log = logging::Logger::new(command);

    let result = match &args.command {
        Command::List => commands::list::run(&args.global, &log),
        Command::Load(opts) => commands::load::run(&args.global, opts, &log),
        Command::Init => commands::init::run(&args.global, &log),
        Command::Version => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
