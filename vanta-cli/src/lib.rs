//! Command-line interface for the Vanta route optimizer.
//!
//! `vanta optimise <request.json>` reads a dispatch request, orders its jobs
//! with the nearest-neighbour heuristic and prints the result as JSON.
//! Optimizer assumptions can be layered from configuration files, `VANTA_*`
//! environment variables and flags.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod optimise;

pub use error::CliError;

use optimise::{OptimiseArgs, run_optimise};

const ARG_REQUEST: &str = "request";
const ARG_OUTPUT: &str = "output";
const ARG_AVERAGE_SPEED_KMH: &str = "average-speed-kmh";
const ARG_FUEL_KM_PER_UNIT: &str = "fuel-km-per-unit";
const ARG_FUEL_PRICE_PER_UNIT: &str = "fuel-price-per-unit";
const ARG_DEFAULT_JOB_MINUTES: &str = "default-job-minutes";
const ARG_REVENUE_JOB_MINUTES: &str = "revenue-job-minutes";
const ARG_MALFORMED_JOBS: &str = "malformed-jobs";
const ENV_REQUEST: &str = "VANTA_CMDS_OPTIMISE_REQUEST_PATH";

/// Run the Vanta CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, request
/// loading, optimization or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimise(args) => run_optimise(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "vanta",
    about = "Route optimization for field service technicians",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order a technician's jobs and report the savings.
    Optimise(OptimiseArgs),
}

#[cfg(test)]
mod tests;
