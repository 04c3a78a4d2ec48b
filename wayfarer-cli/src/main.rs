//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use wayfarer_cli::CliError;

fn main() -> ExitCode {
    match wayfarer_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("wayfarer: {err}");
            ExitCode::FAILURE
        }
    }
}
