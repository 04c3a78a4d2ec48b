//! Command-line interface for the Wayfarer itinerary engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

const ARG_REQUEST: &str = "request";
const ARG_DAYS: &str = "days";
const ARG_START_DATE: &str = "start-date";
const ARG_ANCHOR: &str = "anchor";
const ARG_MIN_PER_DAY: &str = "min-per-day";
const ENV_REQUEST: &str = "WAYFARER_CMDS_PLAN_REQUEST_PATH";
const ENV_START_DATE: &str = "WAYFARER_CMDS_PLAN_START_DATE";

/// Run the Wayfarer CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments, configuration or the trip request
/// are invalid, when planning fails, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Plan day-by-day city itineraries from a set of points of interest",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan an itinerary from a JSON trip request.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
