use memeslug_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // File logging fails on a read-only state dir; fall back to stderr.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("memeslug error: {:#}", err);
        std::process::exit(1);
    }
}
